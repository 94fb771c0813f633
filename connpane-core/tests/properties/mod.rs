mod client_state_tests;
mod filter_tests;
mod presenter_tests;
mod tracing_tests;
