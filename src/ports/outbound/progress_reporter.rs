/// ProgressReporter port for user-facing progress during a fetch
///
/// Diagnostic detail goes to `tracing`; this port carries the short
/// messages a person running the fetch wants to see.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress over the requested roots
    ///
    /// # Arguments
    /// * `current` - Number of roots started so far
    /// * `total` - Number of requested roots
    /// * `message` - Optional message, usually the root being fetched
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the fetch
    fn report_completion(&self, message: &str);
}
