/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_resolution_backend;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resolution_backend::MockResolutionBackend;
