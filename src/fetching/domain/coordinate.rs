use std::fmt;

/// Extension used when a coordinate does not name one
pub const DEFAULT_EXTENSION: &str = "jar";

/// Version marker asking the backend for the most recent version
pub const LATEST_VERSION: &str = "LATEST";

/// Coordinate value object identifying a single artifact file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    extension: String,
    classifier: Option<String>,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            classifier: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_classifier(mut self, classifier: Option<String>) -> Self {
        self.classifier = classifier.filter(|c| !c.is_empty());
        self
    }

    /// Returns a copy of this coordinate pinned to another version
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
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

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// True while the version is still the `LATEST` marker
    pub fn is_unresolved(&self) -> bool {
        self.version == LATEST_VERSION
    }

    /// File name of the artifact in a Maven 2 layout, e.g. `b-1.0.jar`
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, self.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.extension),
        }
    }

    pub fn visited_key(&self) -> VisitedKey {
        VisitedKey::from(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if self.extension != DEFAULT_EXTENSION || self.classifier.is_some() {
            write!(f, ":{}", self.extension)?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// `groupId:artifactId:version` key used to select an artifact at most once
/// per fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitedKey(String);

impl VisitedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Coordinate> for VisitedKey {
    fn from(coordinate: &Coordinate) -> Self {
        Self(format!(
            "{}:{}:{}",
            coordinate.group_id, coordinate.artifact_id, coordinate.version
        ))
    }
}

impl fmt::Display for VisitedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exclusion of every version of a groupId:artifactId pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exclusion {
    group_id: String,
    artifact_id: String,
}

impl Exclusion {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Matches on groupId and artifactId only; `*` matches anything
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        (self.group_id == "*" || self.group_id == coordinate.group_id())
            && (self.artifact_id == "*" || self.artifact_id == coordinate.artifact_id())
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Checks a coordinate against a list of exclusions
pub fn is_excluded(exclusions: &[Exclusion], coordinate: &Coordinate) -> bool {
    exclusions.iter().any(|exclusion| exclusion.matches(coordinate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_defaults_to_jar() {
        let coordinate = Coordinate::new("org.apache.maven", "maven-artifact", "3.9.1");
        assert_eq!(coordinate.extension(), "jar");
        assert!(coordinate.classifier().is_none());
        assert_eq!(coordinate.to_string(), "org.apache.maven:maven-artifact:3.9.1");
    }

    #[test]
    fn test_coordinate_display_with_classifier() {
        let coordinate = Coordinate::new("g", "a", "1.0")
            .with_extension("jar")
            .with_classifier(Some("sources".to_string()));
        assert_eq!(coordinate.to_string(), "g:a:jar:sources:1.0");
        assert_eq!(coordinate.file_name(), "a-1.0-sources.jar");
    }

    #[test]
    fn test_coordinate_file_name() {
        assert_eq!(Coordinate::new("a", "b", "1.0").file_name(), "b-1.0.jar");
        assert_eq!(
            Coordinate::new("a", "b", "1.0").with_extension("pom").file_name(),
            "b-1.0.pom"
        );
    }

    #[test]
    fn test_empty_classifier_is_dropped() {
        let coordinate = Coordinate::new("g", "a", "1").with_classifier(Some(String::new()));
        assert!(coordinate.classifier().is_none());
    }

    #[test]
    fn test_with_version_resolves_latest() {
        let unresolved = Coordinate::new("g", "a", LATEST_VERSION);
        assert!(unresolved.is_unresolved());

        let resolved = unresolved.with_version("2.0");
        assert!(!resolved.is_unresolved());
        assert_eq!(resolved.version(), "2.0");
        assert_eq!(resolved.group_id(), "g");
    }

    #[test]
    fn test_visited_key_ignores_extension() {
        let jar = Coordinate::new("g", "a", "1.0");
        let pom = Coordinate::new("g", "a", "1.0").with_extension("pom");
        assert_eq!(jar.visited_key(), pom.visited_key());
        assert_eq!(jar.visited_key().as_str(), "g:a:1.0");
    }

    #[test]
    fn test_exclusion_matches_any_version() {
        let exclusion = Exclusion::new("org.codehaus.plexus", "plexus-utils");
        assert!(exclusion.matches(&Coordinate::new(
            "org.codehaus.plexus",
            "plexus-utils",
            "3.5.1"
        )));
        assert!(exclusion.matches(&Coordinate::new("org.codehaus.plexus", "plexus-utils", "1.0")));
        assert!(!exclusion.matches(&Coordinate::new("org.codehaus.plexus", "plexus-xml", "3.5.1")));
    }

    #[test]
    fn test_wildcard_exclusion() {
        let exclusion = Exclusion::new("org.slf4j", "*");
        assert!(exclusion.matches(&Coordinate::new("org.slf4j", "slf4j-api", "2.0.9")));
        assert!(!exclusion.matches(&Coordinate::new("org.apache", "slf4j-api", "2.0.9")));
    }

    #[test]
    fn test_is_excluded() {
        let exclusions = vec![Exclusion::new("a", "b")];
        assert!(is_excluded(&exclusions, &Coordinate::new("a", "b", "1")));
        assert!(!is_excluded(&exclusions, &Coordinate::new("a", "c", "1")));
        assert!(!is_excluded(&[], &Coordinate::new("a", "b", "1")));
    }
}
