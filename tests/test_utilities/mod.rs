/// Shared helpers for integration and end-to-end tests
#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod mocks;
