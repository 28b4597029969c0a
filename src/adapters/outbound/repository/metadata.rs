use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    versioning: Versioning,
}

#[derive(Debug, Default, Deserialize)]
struct Versioning {
    latest: Option<String>,
    release: Option<String>,
    #[serde(default)]
    versions: Versions,
}

#[derive(Debug, Default, Deserialize)]
struct Versions {
    #[serde(rename = "version", default)]
    entries: Vec<String>,
}

/// Most recent version advertised by a `maven-metadata.xml` document
///
/// `<latest>` wins, then `<release>`, then the last listed version.
pub fn latest_version(xml: &str) -> Result<Option<String>, quick_xml::de::DeError> {
    let metadata: Metadata = quick_xml::de::from_str(xml)?;
    let versioning = metadata.versioning;

    let non_empty = |v: &String| !v.trim().is_empty();
    Ok(versioning
        .latest
        .filter(non_empty)
        .or(versioning.release.filter(non_empty))
        .or_else(|| versioning.versions.entries.into_iter().rev().find(non_empty))
        .map(|v| v.trim().to_string()))
}
