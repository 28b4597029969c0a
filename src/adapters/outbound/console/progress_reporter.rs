use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} roots - {msg}";

/// StderrProgressReporter adapter for reporting fetch progress to stderr
///
/// Keeps stdout free for the report itself. Progress over the requested
/// roots is drawn as an indicatif bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("🔍 Fetching 2 artifact(s)");
        reporter.report_progress(0, 2, Some("g:a:1.0"));
        reporter.report("- central [https://repo.maven.apache.org/maven2]");
        reporter.report_progress(1, 2, Some("g:b:1.0"));
        reporter.report_completion("✅ Done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_progress_bar_is_reused() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(0, 3, None);
        reporter.report_progress(1, 3, None);
        let length = reporter
            .progress_bar
            .borrow()
            .as_ref()
            .and_then(|pb| pb.length());
        assert_eq!(length, Some(3));
        reporter.report_error("❌ failed");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
