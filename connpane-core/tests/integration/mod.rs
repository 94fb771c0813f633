mod event_loop_tests;
mod persistence_tests;
mod removal_tests;
