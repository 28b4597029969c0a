use crate::fetching::domain::Coordinate;
use crate::ports::outbound::LocalRepository;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "maven-metadata.xml";
pub const CHECKSUM_SUFFIX: &str = ".sha256";

fn group_path(group_id: &str) -> String {
    group_id.replace('.', "/")
}

fn unchecked_artifact_path(coordinate: &Coordinate) -> String {
    format!(
        "{}/{}/{}/{}",
        group_path(coordinate.group_id()),
        coordinate.artifact_id(),
        coordinate.version(),
        coordinate.file_name()
    )
}

/// Repository-relative path of an artifact file in the Maven 2 layout,
/// e.g. `org/apache/maven/maven-artifact/3.9.1/maven-artifact-3.9.1.jar`
///
/// # Errors
/// Returns an error if a coordinate component could escape the layout
pub fn artifact_path(coordinate: &Coordinate) -> Result<String> {
    for segment in coordinate.group_id().split('.') {
        validate_path_segment(segment, "groupId")?;
    }
    validate_path_segment(coordinate.artifact_id(), "artifactId")?;
    validate_path_segment(coordinate.version(), "version")?;
    validate_path_segment(coordinate.extension(), "extension")?;
    if let Some(classifier) = coordinate.classifier() {
        validate_path_segment(classifier, "classifier")?;
    }
    Ok(unchecked_artifact_path(coordinate))
}

/// Repository-relative path of the version metadata of `group_id:artifact_id`
pub fn metadata_path(group_id: &str, artifact_id: &str) -> Result<String> {
    for segment in group_id.split('.') {
        validate_path_segment(segment, "groupId")?;
    }
    validate_path_segment(artifact_id, "artifactId")?;
    Ok(format!("{}/{}/{}", group_path(group_id), artifact_id, METADATA_FILE))
}

/// The POM describing the artifact behind `coordinate`
pub fn pom_coordinate(coordinate: &Coordinate) -> Coordinate {
    Coordinate::new(
        coordinate.group_id(),
        coordinate.artifact_id(),
        coordinate.version(),
    )
    .with_extension("pom")
}

/// Maven2LocalRepository - local repository using the Maven 2 directory layout
#[derive(Debug, Clone)]
pub struct Maven2LocalRepository {
    base_dir: PathBuf,
}

impl Maven2LocalRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl LocalRepository for Maven2LocalRepository {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn local_path_for(&self, coordinate: &Coordinate) -> PathBuf {
        self.base_dir.join(unchecked_artifact_path(coordinate))
    }
}
