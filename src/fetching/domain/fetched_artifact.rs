use super::Coordinate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// FetchedArtifact - an artifact confirmed present in the local repository
///
/// Only built for artifacts whose file exists on disk at materialization
/// time. Equality compares coordinates and dependencies, not the local path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedArtifact {
    group_id: String,
    artifact_id: String,
    version: String,
    path: PathBuf,
    dependencies: Vec<FetchedArtifact>,
}

impl FetchedArtifact {
    pub fn new(coordinate: &Coordinate, path: PathBuf, dependencies: Vec<FetchedArtifact>) -> Self {
        Self {
            group_id: coordinate.group_id().to_string(),
            artifact_id: coordinate.artifact_id().to_string(),
            version: coordinate.version().to_string(),
            path,
            dependencies,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Direct dependencies, in graph order
    pub fn dependencies(&self) -> &[FetchedArtifact] {
        &self.dependencies
    }

    /// `groupId:artifactId:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Every transitive dependency, depth-first, excluding this artifact
    pub fn all_dependencies(&self) -> AllDependencies<'_> {
        AllDependencies {
            stack: self.dependencies.iter().rev().collect(),
        }
    }
}

impl PartialEq for FetchedArtifact {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
            && self.dependencies == other.dependencies
    }
}

impl Eq for FetchedArtifact {}

impl std::fmt::Display for FetchedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Pre-order iterator over the dependencies of a [`FetchedArtifact`]
pub struct AllDependencies<'a> {
    stack: Vec<&'a FetchedArtifact>,
}

impl<'a> Iterator for AllDependencies<'a> {
    type Item = &'a FetchedArtifact;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.dependencies.iter().rev());
        Some(next)
    }
}
