use crate::fetching::domain::FetchedArtifact;
use crate::shared::error::FetchError;

/// Outcome of fetching a single requested root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootOutcome {
    coordinates: String,
    artifacts: Vec<FetchedArtifact>,
    errors: Vec<FetchError>,
}

impl RootOutcome {
    pub fn new(coordinates: impl Into<String>) -> Self {
        Self {
            coordinates: coordinates.into(),
            artifacts: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_artifacts(mut self, artifacts: Vec<FetchedArtifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn push_error(&mut self, error: FetchError) {
        self.errors.push(error);
    }

    /// Resolved coordinates of the requested root
    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }

    pub fn artifacts(&self) -> &[FetchedArtifact] {
        &self.artifacts
    }

    pub fn errors(&self) -> &[FetchError] {
        &self.errors
    }
}

/// FetchResult - read-only result of one fetch
///
/// Every accessor returns a fresh iterator, so the result can be walked any
/// number of times with the same outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    outcomes: Vec<RootOutcome>,
}

impl FetchResult {
    pub fn new(outcomes: Vec<RootOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[RootOutcome] {
        &self.outcomes
    }

    /// Top-level artifacts, in request order
    pub fn artifacts(&self) -> impl Iterator<Item = &FetchedArtifact> + '_ {
        self.outcomes.iter().flat_map(|o| o.artifacts.iter())
    }

    /// Every top-level artifact followed by the transitive dependencies of
    /// each, depth-first
    pub fn all_artifacts(&self) -> impl Iterator<Item = &FetchedArtifact> + '_ {
        self.artifacts()
            .chain(self.artifacts().flat_map(FetchedArtifact::all_dependencies))
    }

    pub fn errors(&self) -> impl Iterator<Item = &FetchError> + '_ {
        self.outcomes.iter().flat_map(|o| o.errors.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|o| !o.errors.is_empty())
    }
}
