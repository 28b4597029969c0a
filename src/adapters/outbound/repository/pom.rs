use crate::fetching::domain::{ArtifactDescriptor, Coordinate, Dependency, Exclusion};
use crate::shared::error::FetchError;
use serde::Deserialize;

const DEFAULT_SCOPE: &str = "compile";

#[derive(Debug, Default, Deserialize)]
struct Project {
    #[serde(default)]
    dependencies: DependencyList,
    #[serde(rename = "dependencyManagement", default)]
    dependency_management: DependencyManagement,
}

#[derive(Debug, Default, Deserialize)]
struct DependencyManagement {
    #[serde(default)]
    dependencies: DependencyList,
}

#[derive(Debug, Default, Deserialize)]
struct DependencyList {
    #[serde(rename = "dependency", default)]
    entries: Vec<PomDependency>,
}

#[derive(Debug, Deserialize)]
struct PomDependency {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    classifier: Option<String>,
    scope: Option<String>,
    optional: Option<String>,
    #[serde(default)]
    exclusions: ExclusionList,
}

#[derive(Debug, Default, Deserialize)]
struct ExclusionList {
    #[serde(rename = "exclusion", default)]
    entries: Vec<PomExclusion>,
}

#[derive(Debug, Deserialize)]
struct PomExclusion {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
}

/// Maps a dependency `type` onto the file extension and implied classifier
fn artifact_type(kind: Option<&str>) -> (&str, Option<&str>) {
    match kind.map(str::trim).filter(|k| !k.is_empty()) {
        None => ("jar", None),
        Some("test-jar") => ("jar", Some("tests")),
        Some("java-source") => ("jar", Some("sources")),
        Some("javadoc") => ("jar", Some("javadoc")),
        Some("maven-plugin" | "bundle" | "ejb" | "ejb-client") => ("jar", None),
        Some(other) => (other, None),
    }
}

/// A value usable as-is: present, non-empty and free of `${...}` expressions
fn literal(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.contains("${"))
}

impl PomDependency {
    fn coordinate(&self, version: &str) -> Coordinate {
        let (extension, implied_classifier) = artifact_type(self.kind.as_deref());
        let classifier = literal(self.classifier.as_deref()).or(implied_classifier);
        Coordinate::new(self.group_id.trim(), self.artifact_id.trim(), version)
            .with_extension(extension)
            .with_classifier(classifier.map(str::to_string))
    }

    fn has_literal_key(&self) -> bool {
        literal(Some(self.group_id.as_str())).is_some()
            && literal(Some(self.artifact_id.as_str())).is_some()
    }

    fn is_optional(&self) -> bool {
        self.optional
            .as_deref()
            .is_some_and(|o| o.trim().eq_ignore_ascii_case("true"))
    }

    fn exclusions(&self) -> Vec<Exclusion> {
        self.exclusions
            .entries
            .iter()
            .map(|e| Exclusion::new(e.group_id.trim(), e.artifact_id.trim()))
            .collect()
    }
}

fn managed_entries(project: &Project, owner: &Coordinate) -> Vec<Dependency> {
    project
        .dependency_management
        .dependencies
        .entries
        .iter()
        .filter_map(|entry| {
            let version = literal(entry.version.as_deref());
            match version {
                Some(version) if entry.has_literal_key() => {
                    let scope = literal(entry.scope.as_deref()).unwrap_or_default();
                    if scope == "import" {
                        tracing::debug!(
                            "{}: imported dependency management {}:{} is not followed",
                            owner,
                            entry.group_id,
                            entry.artifact_id
                        );
                        return None;
                    }
                    Some(
                        Dependency::new(entry.coordinate(version), scope)
                            .with_exclusions(entry.exclusions()),
                    )
                }
                _ => None,
            }
        })
        .collect()
}

/// Parses a POM into the descriptor of `owner`
///
/// Only the dependencies and dependency management declared in this POM are
/// considered. A dependency whose version is neither declared literally nor
/// managed here is skipped with a warning.
///
/// # Errors
/// Returns [`FetchError::DescriptorRead`] if the document is not a valid POM
pub fn parse_descriptor(owner: &Coordinate, xml: &str) -> Result<ArtifactDescriptor, FetchError> {
    let project: Project =
        quick_xml::de::from_str(xml).map_err(|e| FetchError::DescriptorRead {
            coordinates: owner.to_string(),
            details: e.to_string(),
        })?;

    let managed = managed_entries(&project, owner);
    let descriptor = ArtifactDescriptor::new(Vec::new(), managed.clone());

    let mut dependencies = Vec::new();
    for entry in &project.dependencies.entries {
        if !entry.has_literal_key() {
            tracing::warn!(
                "{}: skipping dependency {}:{} with unresolved identifiers",
                owner,
                entry.group_id,
                entry.artifact_id
            );
            continue;
        }

        let unversioned = entry.coordinate("");
        let managed_entry = descriptor.managed_entry_for(&unversioned);
        let version = literal(entry.version.as_deref())
            .or_else(|| managed_entry.map(|m| m.coordinate().version()));
        let Some(version) = version else {
            tracing::warn!(
                "{}: skipping dependency {}:{} without a resolvable version",
                owner,
                entry.group_id,
                entry.artifact_id
            );
            continue;
        };

        let scope = literal(entry.scope.as_deref())
            .or_else(|| managed_entry.map(Dependency::scope).filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_SCOPE);

        dependencies.push(
            Dependency::new(entry.coordinate(version), scope)
                .optional(entry.is_optional())
                .with_exclusions(entry.exclusions()),
        );
    }

    Ok(ArtifactDescriptor::new(dependencies, managed))
}
