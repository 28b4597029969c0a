use crate::application::dto::FetchResult;
use crate::shared::Result;

/// FetchResultFormatter port for rendering a fetch result
///
/// This port abstracts the output format (text tree, JSON, etc.).
pub trait FetchResultFormatter {
    /// Renders the fetched artifact trees and any recorded errors
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, result: &FetchResult) -> Result<String>;
}
