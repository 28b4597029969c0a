use crate::ports::outbound::{TransferEvent, TransferListener};
use std::cell::RefCell;

const TRACKED_EXTENSION: &str = ".jar";

/// TransferTracker - records which artifact files were transferred and which failed
///
/// Only `.jar` resources are tracked. A file that fails and later succeeds
/// (e.g. from a second repository) is no longer considered failed.
/// Bookkeeping uses `RefCell`, so a tracker belongs to a single fetch thread.
#[derive(Debug, Default)]
pub struct TransferTracker {
    succeeded: RefCell<Vec<String>>,
    failed: RefCell<Vec<String>>,
}

impl TransferTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// File names successfully transferred, in order
    pub fn succeeded_transfers(&self) -> Vec<String> {
        self.succeeded.borrow().clone()
    }

    /// File names whose transfer failed and never succeeded afterwards
    pub fn failed_transfers(&self) -> Vec<String> {
        self.failed.borrow().clone()
    }

    /// Drains the failed file names recorded so far
    pub fn take_failed_transfers(&self) -> Vec<String> {
        std::mem::take(&mut *self.failed.borrow_mut())
    }

    fn is_tracked(event: &TransferEvent) -> bool {
        event.resource_name().ends_with(TRACKED_EXTENSION)
    }
}

fn padded_name(event: &TransferEvent) -> String {
    format!("{:<80}", event.file_name())
}

fn formatted_size(event: &TransferEvent) -> String {
    let size = event.content_length().unwrap_or(0);
    let size = if size > 1000 {
        format!("{} Kb", size / 1000)
    } else {
        format!("{} bytes", size)
    };
    format!("{:>7}", size)
}

impl TransferListener for TransferTracker {
    fn transfer_started(&self, event: &TransferEvent) {
        if Self::is_tracked(event) {
            tracing::debug!(
                "Transferring {} [{}] from {}  ...",
                padded_name(event),
                formatted_size(event),
                event.repository_url()
            );
        }
    }

    fn transfer_succeeded(&self, event: &TransferEvent) {
        if !Self::is_tracked(event) {
            return;
        }
        let file_name = event.file_name().to_string();
        self.failed.borrow_mut().retain(|failed| failed != &file_name);
        self.succeeded.borrow_mut().push(file_name);

        if event.content_length().is_some_and(|length| length > 0) {
            tracing::info!(
                "{} [{}] downloaded from {}",
                padded_name(event),
                formatted_size(event),
                event.repository_url()
            );
        }
    }

    fn transfer_failed(&self, event: &TransferEvent) {
        if !Self::is_tracked(event) {
            return;
        }
        let file_name = event.file_name().to_string();
        let mut failed = self.failed.borrow_mut();
        if !failed.contains(&file_name) {
            failed.push(file_name);
        }
        tracing::warn!(
            "Cannot download {} from {}",
            padded_name(event),
            event.repository_url()
        );
    }

    fn transfer_corrupted(&self, event: &TransferEvent) {
        if Self::is_tracked(event) {
            tracing::error!("Checksum validation failed for [{}]", padded_name(event));
        }
    }
}
