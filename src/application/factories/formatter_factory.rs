use crate::adapters::outbound::formatters::{JsonFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::FetchResultFormatter;

/// Factory for creating fetch result formatters
///
/// Picks the formatter adapter for the output format requested on the
/// command line.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use maven_fetcher::application::dto::OutputFormat;
    /// use maven_fetcher::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn FetchResultFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextTreeFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering dependency tree...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
