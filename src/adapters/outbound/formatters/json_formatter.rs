use crate::application::dto::{FetchResult, RootOutcome};
use crate::fetching::domain::FetchedArtifact;
use crate::ports::outbound::FetchResultFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    tool: Tool,
    roots: Vec<Root<'a>>,
    artifacts: Vec<&'a FetchedArtifact>,
    #[serde(rename = "hasErrors")]
    has_errors: bool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct Root<'a> {
    coordinates: &'a str,
    artifacts: &'a [FetchedArtifact],
    errors: Vec<String>,
}

impl<'a> From<&'a RootOutcome> for Root<'a> {
    fn from(outcome: &'a RootOutcome) -> Self {
        Self {
            coordinates: outcome.coordinates(),
            artifacts: outcome.artifacts(),
            errors: outcome.errors().iter().map(ToString::to_string).collect(),
        }
    }
}

/// JsonFormatter adapter rendering a fetch result as pretty-printed JSON
///
/// `roots` keeps the tree of every requested root with its errors;
/// `artifacts` is the flattened list, roots first.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchResultFormatter for JsonFormatter {
    fn format(&self, result: &FetchResult) -> Result<String> {
        let report = Report {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            roots: result.outcomes().iter().map(Root::from).collect(),
            artifacts: result.all_artifacts().collect(),
            has_errors: result.has_errors(),
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
