//! Connection state module
//!
//! This module provides the `ConnectionStore`, the in-memory copy of the
//! backend session's connection list and active connection ids.

mod store;

pub use store::ConnectionStore;
