use super::layout::{
    artifact_path, metadata_path, pom_coordinate, Maven2LocalRepository, CHECKSUM_SUFFIX,
};
use super::{metadata, pom};
use crate::adapters::outbound::network::RepositoryClient;
use crate::fetching::domain::{
    is_excluded, ArtifactDescriptor, Coordinate, Dependency, DependencyNode, Exclusion,
    RemoteRepository,
};
use crate::ports::outbound::{
    DependencySelector, LocalRepository, ResolutionBackend, TransferEvent, TransferListener,
};
use crate::shared::error::FetchError;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Deepest dependency path followed during graph collection
pub const MAX_GRAPH_DEPTH: usize = 100;

/// Maven2RepositoryBackend - resolution backend over Maven 2 layout repositories
///
/// Repositories are consulted in order. Downloaded files land in the local
/// repository and are reused from there on later calls.
pub struct Maven2RepositoryBackend {
    client: RepositoryClient,
    repositories: Vec<RemoteRepository>,
    local_repository: Maven2LocalRepository,
}

struct GraphWalk<'a, 's> {
    root: &'a Coordinate,
    root_descriptor: &'a ArtifactDescriptor,
    selector: &'a mut (dyn DependencySelector + 's),
    listener: &'a dyn TransferListener,
}

impl Maven2RepositoryBackend {
    pub fn new(
        client: RepositoryClient,
        repositories: Vec<RemoteRepository>,
        local_repository: Maven2LocalRepository,
    ) -> Self {
        Self {
            client,
            repositories,
            local_repository,
        }
    }

    pub fn local_repository(&self) -> &Maven2LocalRepository {
        &self.local_repository
    }

    /// Downloads `resource` into `target` from the first repository having a
    /// valid copy, reporting every attempt to `listener`
    fn download(&self, resource: &str, target: &Path, listener: &dyn TransferListener) -> bool {
        for repository in &self.repositories {
            let event = TransferEvent::new(repository.url(), resource);
            listener.transfer_started(&event);

            let content = match self.client.fetch(repository, resource) {
                Ok(Some(content)) => content,
                Ok(None) => {
                    listener.transfer_failed(&event);
                    continue;
                }
                Err(e) => {
                    tracing::debug!("Cannot read {} from {}: {:#}", resource, repository.id(), e);
                    listener.transfer_failed(&event);
                    continue;
                }
            };

            let event = event.with_content_length(content.len() as u64);
            if !self.checksum_matches(repository, resource, &content) {
                listener.transfer_corrupted(&event);
                listener.transfer_failed(&event);
                continue;
            }

            if let Err(e) = store(target, &content) {
                tracing::warn!("Cannot store {}: {:#}", target.display(), e);
                listener.transfer_failed(&event);
                continue;
            }

            listener.transfer_succeeded(&event);
            return true;
        }
        false
    }

    /// False only when the repository publishes a SHA-256 that does not match
    fn checksum_matches(
        &self,
        repository: &RemoteRepository,
        resource: &str,
        content: &[u8],
    ) -> bool {
        let checksum_resource = format!("{}{}", resource, CHECKSUM_SUFFIX);
        let published = match self.client.fetch(repository, &checksum_resource) {
            Ok(Some(published)) => published,
            Ok(None) => return true,
            Err(e) => {
                tracing::debug!("Checksum of {} unavailable: {:#}", resource, e);
                return true;
            }
        };

        let published = String::from_utf8_lossy(&published);
        let expected = published.split_whitespace().next().unwrap_or_default();
        let actual = hex::encode(Sha256::digest(content));
        tracing::debug!("SHA-256 of {}: expected {}, got {}", resource, expected, actual);
        actual.eq_ignore_ascii_case(expected)
    }

    fn collect_children(
        &self,
        walk: &mut GraphWalk<'_, '_>,
        dependencies: &[Dependency],
        inherited_exclusions: &[Exclusion],
        depth: usize,
    ) -> std::result::Result<Vec<DependencyNode>, FetchError> {
        if depth > MAX_GRAPH_DEPTH {
            tracing::warn!(
                "Dependency graph of {} is deeper than {} levels, truncated",
                walk.root,
                MAX_GRAPH_DEPTH
            );
            return Ok(Vec::new());
        }

        let mut nodes = Vec::new();
        for declared in dependencies {
            if is_excluded(inherited_exclusions, declared.coordinate()) {
                continue;
            }

            let dependency = match walk.root_descriptor.managed_entry_for(declared.coordinate()) {
                Some(managed) if depth > 1 => declared.clone().managed_by(managed),
                _ => declared.clone(),
            };
            if !walk.selector.select_dependency(&dependency) {
                continue;
            }

            let descriptor = self
                .read_descriptor(dependency.coordinate(), walk.listener)
                .map_err(|e| FetchError::GraphCollection {
                    coordinates: walk.root.to_string(),
                    details: e.to_string(),
                })?;

            let mut exclusions = inherited_exclusions.to_vec();
            exclusions.extend(dependency.exclusions().iter().cloned());
            let children =
                self.collect_children(walk, descriptor.dependencies(), &exclusions, depth + 1)?;

            nodes.push(DependencyNode::from_dependency(&dependency).with_children(children));
        }
        Ok(nodes)
    }
}

/// Writes through a sibling temporary file so a partial download never
/// occupies the final path
fn store(target: &Path, content: &[u8]) -> Result<()> {
    let parent = target
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", target.display()))?;
    fs::create_dir_all(parent)?;

    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let partial = parent.join(format!(".{}.part", file_name));
    fs::write(&partial, content)?;
    fs::rename(&partial, target)?;
    Ok(())
}

impl ResolutionBackend for Maven2RepositoryBackend {
    fn remote_repositories(&self) -> &[RemoteRepository] {
        &self.repositories
    }

    fn resolve_latest_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> std::result::Result<String, FetchError> {
        let coordinates = format!("{}:{}", group_id, artifact_id);
        let resource = metadata_path(group_id, artifact_id).map_err(|e| {
            FetchError::CoordinateResolution {
                coordinates: coordinates.clone(),
                details: e.to_string(),
            }
        })?;

        for repository in &self.repositories {
            match self.client.fetch(repository, &resource) {
                Ok(Some(content)) => {
                    match metadata::latest_version(&String::from_utf8_lossy(&content)) {
                        Ok(Some(version)) => return Ok(version),
                        Ok(None) => {
                            tracing::debug!(
                                "{} lists no version of {}",
                                repository.id(),
                                coordinates
                            )
                        }
                        Err(e) => tracing::debug!(
                            "Invalid version metadata for {} in {}: {}",
                            coordinates,
                            repository.id(),
                            e
                        ),
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::debug!(
                    "Cannot read {} from {}: {:#}",
                    resource,
                    repository.id(),
                    e
                ),
            }
        }

        Err(FetchError::CoordinateResolution {
            coordinates,
            details: "no remote repository reports a version".to_string(),
        })
    }

    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        listener: &dyn TransferListener,
    ) -> std::result::Result<ArtifactDescriptor, FetchError> {
        let read_error = |details: String| FetchError::DescriptorRead {
            coordinates: coordinate.to_string(),
            details,
        };

        let pom = pom_coordinate(coordinate);
        let resource = artifact_path(&pom).map_err(|e| read_error(e.to_string()))?;
        let local = self.local_repository.local_path_for(&pom);

        if !local.is_file() && !self.download(&resource, &local, listener) {
            tracing::warn!(
                "The POM for {} is missing, no dependency information available",
                coordinate
            );
            return Ok(ArtifactDescriptor::default());
        }

        let xml = fs::read_to_string(&local).map_err(|e| read_error(e.to_string()))?;
        pom::parse_descriptor(coordinate, &xml)
    }

    fn collect_graph(
        &self,
        root: &Coordinate,
        descriptor: &ArtifactDescriptor,
        selector: &mut dyn DependencySelector,
        listener: &dyn TransferListener,
    ) -> std::result::Result<DependencyNode, FetchError> {
        let mut walk = GraphWalk {
            root,
            root_descriptor: descriptor,
            selector,
            listener,
        };
        let children = self.collect_children(&mut walk, descriptor.dependencies(), &[], 1)?;
        Ok(DependencyNode::root(root.clone()).with_children(children))
    }

    fn retrieve_artifact(
        &self,
        coordinate: &Coordinate,
        listener: &dyn TransferListener,
    ) -> std::result::Result<PathBuf, FetchError> {
        let not_fetched = || FetchError::ArtifactRetrieval {
            file: coordinate.file_name(),
        };

        let resource = artifact_path(coordinate).map_err(|e| {
            tracing::debug!("Refusing to fetch {}: {:#}", coordinate, e);
            not_fetched()
        })?;
        let local = self.local_repository.local_path_for(coordinate);
        if local.is_file() {
            return Ok(local);
        }

        if self.download(&resource, &local, listener) {
            Ok(local)
        } else {
            Err(not_fetched())
        }
    }
}
