/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the resolution backend, local storage, and the console.
pub mod formatter;
pub mod local_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resolution_backend;
pub mod transfer_listener;

pub use formatter::FetchResultFormatter;
pub use local_repository::LocalRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resolution_backend::{DependencySelector, ResolutionBackend};
pub use transfer_listener::{TransferEvent, TransferListener};
