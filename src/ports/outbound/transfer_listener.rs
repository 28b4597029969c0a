/// A single file transfer between a remote repository and local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    repository_url: String,
    resource_name: String,
    content_length: Option<u64>,
}

impl TransferEvent {
    pub fn new(repository_url: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            resource_name: resource_name.into(),
            content_length: None,
        }
    }

    pub fn with_content_length(mut self, content_length: u64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    /// Repository-relative path, e.g. `a/b/1.0/b-1.0.jar`
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Last path segment of the resource name
    pub fn file_name(&self) -> &str {
        self.resource_name
            .rsplit('/')
            .next()
            .unwrap_or(&self.resource_name)
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }
}

/// TransferListener port receiving transfer notifications from the backend
///
/// Notifications are informational: they never drive control flow.
pub trait TransferListener {
    fn transfer_started(&self, _event: &TransferEvent) {}

    fn transfer_succeeded(&self, _event: &TransferEvent) {}

    fn transfer_failed(&self, _event: &TransferEvent) {}

    /// Downloaded content did not match the checksum published next to it
    fn transfer_corrupted(&self, _event: &TransferEvent) {}
}
