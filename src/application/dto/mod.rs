/// Data Transfer Objects for application layer
///
/// DTOs carry a fetch request into the use case and the fetch result back
/// out to the formatters, keeping adapters away from the fetching core.
mod fetch_request;
mod fetch_result;
mod output_format;

pub use fetch_request::FetchRequest;
pub use fetch_result::{FetchResult, RootOutcome};
pub use output_format::OutputFormat;
