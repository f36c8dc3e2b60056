// Shared fakes and setup for the controller tests
pub mod common;
