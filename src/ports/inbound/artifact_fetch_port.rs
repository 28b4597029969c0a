use crate::application::dto::{FetchRequest, FetchResult};
use crate::shared::Result;

/// ArtifactFetchPort - Inbound port for the artifact fetch use case
///
/// This port defines the interface that external adapters (CLI, embedding
/// applications) use to trigger a fetch. It represents the library's public API.
pub trait ArtifactFetchPort {
    /// Fetches the requested artifacts and their selected dependencies
    ///
    /// # Returns
    /// A result holding every artifact confirmed in local storage, plus the
    /// per-artifact errors collected along the way
    ///
    /// # Errors
    /// Returns an error before anything is fetched if:
    /// - A coordinate or exclusion is malformed
    /// - A version-less coordinate cannot be resolved
    fn fetch(&self, request: FetchRequest) -> Result<FetchResult>;
}
