// Library target exists solely for the integration tests in tests/, which
// drive the feedback pipeline through `tutorchat::feedback` /
// `tutorchat::session`. The binary entry point is main.rs.
#![allow(dead_code)]

// Public: exercised by the integration tests
pub mod feedback;
pub mod session;

// Private: required transitively (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
