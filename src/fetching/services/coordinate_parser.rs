use crate::fetching::domain::{Coordinate, Exclusion, LATEST_VERSION};
use crate::shared::error::FetchError;

/// Outcome of the structural parse of a coordinate string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCoordinate {
    /// Every segment was given, version included
    Versioned(Coordinate),
    /// Version omitted or given as `LATEST`; the coordinate carries the
    /// `LATEST` marker until resolved
    Unversioned(Coordinate),
}

/// CoordinateParser - turns coordinate strings into resolved coordinates
///
/// Interpretation happens in two steps: [`CoordinateParser::parse`] only looks
/// at the structure of the string, and [`CoordinateParser::resolve`] falls
/// back to a latest-version lookup for the unversioned case alone.
pub struct CoordinateParser;

impl CoordinateParser {
    /// Parses `<groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>`
    /// or `<groupId>:<artifactId>`
    ///
    /// # Errors
    /// Returns [`FetchError::MalformedCoordinate`] if fewer than two or more
    /// than five segments are present, or a required segment is empty
    pub fn parse(coordinates: &str) -> Result<ParsedCoordinate, FetchError> {
        let malformed = |reason: &str| FetchError::MalformedCoordinate {
            coordinates: coordinates.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = coordinates.trim().split(':').map(str::trim).collect();
        if parts.len() < 2 {
            return Err(malformed("expected at least <groupId>:<artifactId>"));
        }
        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(malformed("groupId and artifactId must not be empty"));
        }

        let (group_id, artifact_id) = (parts[0], parts[1]);
        let (extension, classifier, version) = match parts.len() {
            2 => (None, None, LATEST_VERSION),
            3 => (None, None, parts[2]),
            4 => (Some(parts[2]), None, parts[3]),
            5 => (Some(parts[2]), Some(parts[3]), parts[4]),
            _ => return Err(malformed("too many segments")),
        };

        if version.is_empty() || extension.is_some_and(str::is_empty) {
            return Err(malformed("empty segment"));
        }

        let mut coordinate = Coordinate::new(group_id, artifact_id, version)
            .with_classifier(classifier.map(str::to_string));
        if let Some(extension) = extension {
            coordinate = coordinate.with_extension(extension);
        }

        if coordinate.is_unresolved() {
            Ok(ParsedCoordinate::Unversioned(coordinate))
        } else {
            Ok(ParsedCoordinate::Versioned(coordinate))
        }
    }

    /// Parses and resolves a coordinate, asking `latest_version` for the
    /// version when none was given
    ///
    /// # Errors
    /// - [`FetchError::MalformedCoordinate`] from the structural parse
    /// - [`FetchError::CoordinateResolution`] if the lookup fails or returns
    ///   an empty version
    pub fn resolve<F>(coordinates: &str, latest_version: F) -> Result<Coordinate, FetchError>
    where
        F: FnOnce(&str, &str) -> Result<String, FetchError>,
    {
        match Self::parse(coordinates)? {
            ParsedCoordinate::Versioned(coordinate) => Ok(coordinate),
            ParsedCoordinate::Unversioned(coordinate) => {
                let version = latest_version(coordinate.group_id(), coordinate.artifact_id())
                    .map_err(|e| match e {
                        FetchError::CoordinateResolution { .. } => e,
                        other => FetchError::CoordinateResolution {
                            coordinates: coordinates.to_string(),
                            details: other.to_string(),
                        },
                    })?;
                if version.trim().is_empty() || version == LATEST_VERSION {
                    return Err(FetchError::CoordinateResolution {
                        coordinates: coordinates.to_string(),
                        details: "no version reported".to_string(),
                    });
                }
                Ok(coordinate.with_version(version.trim()))
            }
        }
    }

    /// Parses an exclusion `<groupId>:<artifactId>`; trailing segments are ignored
    ///
    /// # Errors
    /// Returns [`FetchError::MalformedCoordinate`] if fewer than two
    /// non-empty segments are present
    pub fn parse_exclusion(coordinates: &str) -> Result<Exclusion, FetchError> {
        let parts: Vec<&str> = coordinates.trim().split(':').map(str::trim).collect();
        match parts.as_slice() {
            [group_id, artifact_id, ..] if !group_id.is_empty() && !artifact_id.is_empty() => {
                Ok(Exclusion::new(*group_id, *artifact_id))
            }
            _ => Err(FetchError::MalformedCoordinate {
                coordinates: coordinates.to_string(),
                reason: "invalid exclusion, expected <groupId>:<artifactId>".to_string(),
            }),
        }
    }
}
