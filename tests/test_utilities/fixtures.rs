use maven_fetcher::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Maven 2 layout repository on disk, reachable through a `file://` URL,
/// together with an empty local repository
pub struct RepositoryFixture {
    remote: TempDir,
    local: TempDir,
}

/// A dependency declared in a published POM
pub struct Declared<'a> {
    pub coords: &'a str,
    pub scope: &'a str,
    pub optional: bool,
}

pub fn compile(coords: &str) -> Declared<'_> {
    Declared {
        coords,
        scope: "compile",
        optional: false,
    }
}

pub fn scoped<'a>(coords: &'a str, scope: &'a str) -> Declared<'a> {
    Declared {
        coords,
        scope,
        optional: false,
    }
}

pub fn optional(coords: &str) -> Declared<'_> {
    Declared {
        coords,
        scope: "compile",
        optional: true,
    }
}

fn split(coords: &str) -> (&str, &str, &str) {
    let parts: Vec<&str> = coords.split(':').collect();
    (parts[0], parts[1], parts[2])
}

/// `g/a/v/a-v.<extension>`
pub fn resource(coords: &str, extension: &str) -> String {
    let (group_id, artifact_id, version) = split(coords);
    format!(
        "{}/{}/{}/{}-{}.{}",
        group_id.replace('.', "/"),
        artifact_id,
        version,
        artifact_id,
        version,
        extension
    )
}

impl RepositoryFixture {
    pub fn new() -> Self {
        Self {
            remote: TempDir::new().unwrap(),
            local: TempDir::new().unwrap(),
        }
    }

    pub fn remote_dir(&self) -> &Path {
        self.remote.path()
    }

    pub fn local_dir(&self) -> &Path {
        self.local.path()
    }

    pub fn remote_url(&self) -> String {
        url::Url::from_directory_path(self.remote.path())
            .unwrap()
            .to_string()
    }

    /// `-r` / `remoteRepositories` value for this repository
    pub fn repository_value(&self, id: &str) -> String {
        format!("{}={}", id, self.remote_url())
    }

    /// Publishes POM and jar of `coords`
    pub fn publish(&self, coords: &str, dependencies: &[Declared<'_>]) -> &Self {
        self.publish_pom(coords, dependencies);
        self.write(&resource(coords, "jar"), coords.as_bytes());
        self
    }

    /// Publishes only the POM of `coords`
    pub fn publish_pom(&self, coords: &str, dependencies: &[Declared<'_>]) -> &Self {
        let dependencies: String = dependencies
            .iter()
            .map(|d| {
                let (group_id, artifact_id, version) = split(d.coords);
                format!(
                    "<dependency><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version><scope>{}</scope><optional>{}</optional></dependency>",
                    group_id, artifact_id, version, d.scope, d.optional
                )
            })
            .collect();
        let (group_id, artifact_id, version) = split(coords);
        let pom = format!(
            "<project><modelVersion>4.0.0</modelVersion><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version><dependencies>{}</dependencies></project>",
            group_id, artifact_id, version, dependencies
        );
        self.write(&resource(coords, "pom"), pom.as_bytes());
        self
    }

    /// Publishes `maven-metadata.xml` listing `versions`, the last one as latest
    pub fn publish_versions(&self, group_artifact: &str, versions: &[&str]) -> &Self {
        let (group_id, artifact_id) = group_artifact.split_once(':').unwrap();
        let listed: String = versions
            .iter()
            .map(|v| format!("<version>{}</version>", v))
            .collect();
        let metadata = format!(
            "<metadata><groupId>{}</groupId><artifactId>{}</artifactId><versioning><latest>{}</latest><versions>{}</versions></versioning></metadata>",
            group_id,
            artifact_id,
            versions.last().unwrap(),
            listed
        );
        self.write(
            &format!("{}/{}/maven-metadata.xml", group_id.replace('.', "/"), artifact_id),
            metadata.as_bytes(),
        );
        self
    }

    /// Publishes a SHA-256 checksum for the jar of `coords`; a wrong one
    /// when `valid` is false
    pub fn publish_checksum(&self, coords: &str, valid: bool) -> &Self {
        let checksum = if valid {
            hex::encode(Sha256::digest(coords.as_bytes()))
        } else {
            hex::encode(Sha256::digest(b"tampered"))
        };
        self.write(&format!("{}.sha256", resource(coords, "jar")), checksum.as_bytes());
        self
    }

    pub fn write(&self, resource: &str, content: &[u8]) {
        let path = self.remote.path().join(resource);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Path of `coords`'s jar in the local repository
    pub fn local_jar(&self, coords: &str) -> PathBuf {
        self.local.path().join(resource(coords, "jar"))
    }

    pub fn backend(&self) -> Maven2RepositoryBackend {
        Maven2RepositoryBackend::new(
            RepositoryClient::new(None).unwrap(),
            vec![RemoteRepository::new("fixture", self.remote_url())],
            Maven2LocalRepository::new(self.local.path()),
        )
    }
}
