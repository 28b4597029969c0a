use maven_fetcher::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// In-memory ResolutionBackend that installs published artifacts into a
/// Maven 2 local repository on retrieval
pub struct MockResolutionBackend {
    repositories: Vec<RemoteRepository>,
    local_repository: Maven2LocalRepository,
    descriptors: HashMap<String, Vec<Dependency>>,
    jars: Vec<String>,
    unreadable: Vec<String>,
    latest: HashMap<String, String>,
}

impl MockResolutionBackend {
    pub fn new(local_repository: Maven2LocalRepository) -> Self {
        Self {
            repositories: vec![RemoteRepository::new("memory", "file:///memory")],
            local_repository,
            descriptors: HashMap::new(),
            jars: Vec::new(),
            unreadable: Vec::new(),
            latest: HashMap::new(),
        }
    }

    /// Publishes descriptor and jar of `coords`; dependencies are
    /// `(coords, scope)` pairs
    pub fn with_artifact(mut self, coords: &str, dependencies: &[(&str, &str)]) -> Self {
        self = self.with_descriptor_only(coords, dependencies);
        self.jars.push(coords.to_string());
        self
    }

    pub fn with_descriptor_only(mut self, coords: &str, dependencies: &[(&str, &str)]) -> Self {
        let dependencies = dependencies
            .iter()
            .map(|(c, scope)| Dependency::new(coordinate(c), *scope))
            .collect();
        self.descriptors.insert(coords.to_string(), dependencies);
        self
    }

    pub fn with_unreadable_descriptor(mut self, coords: &str) -> Self {
        self.unreadable.push(coords.to_string());
        self
    }

    pub fn with_latest(mut self, group_artifact: &str, version: &str) -> Self {
        self.latest
            .insert(group_artifact.to_string(), version.to_string());
        self
    }

    fn children(
        &self,
        coordinate: &Coordinate,
        selector: &mut dyn DependencySelector,
    ) -> Vec<DependencyNode> {
        let mut nodes = Vec::new();
        for dependency in self
            .descriptors
            .get(&coordinate.to_string())
            .cloned()
            .unwrap_or_default()
        {
            if selector.select_dependency(&dependency) {
                let children = self.children(dependency.coordinate(), selector);
                nodes.push(DependencyNode::from_dependency(&dependency).with_children(children));
            }
        }
        nodes
    }
}

pub fn coordinate(coords: &str) -> Coordinate {
    let parts: Vec<&str> = coords.split(':').collect();
    Coordinate::new(parts[0], parts[1], parts[2])
}

impl ResolutionBackend for MockResolutionBackend {
    fn remote_repositories(&self) -> &[RemoteRepository] {
        &self.repositories
    }

    fn resolve_latest_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> std::result::Result<String, FetchError> {
        let key = format!("{}:{}", group_id, artifact_id);
        self.latest
            .get(&key)
            .cloned()
            .ok_or(FetchError::CoordinateResolution {
                coordinates: key,
                details: "not published".to_string(),
            })
    }

    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        _listener: &dyn TransferListener,
    ) -> std::result::Result<ArtifactDescriptor, FetchError> {
        let key = coordinate.to_string();
        if self.unreadable.contains(&key) {
            return Err(FetchError::DescriptorRead {
                coordinates: key,
                details: "unreadable descriptor".to_string(),
            });
        }
        let dependencies = self.descriptors.get(&key).cloned().unwrap_or_default();
        Ok(ArtifactDescriptor::new(dependencies, Vec::new()))
    }

    fn collect_graph(
        &self,
        root: &Coordinate,
        _descriptor: &ArtifactDescriptor,
        selector: &mut dyn DependencySelector,
        _listener: &dyn TransferListener,
    ) -> std::result::Result<DependencyNode, FetchError> {
        Ok(DependencyNode::root(root.clone()).with_children(self.children(root, selector)))
    }

    fn retrieve_artifact(
        &self,
        coordinate: &Coordinate,
        listener: &dyn TransferListener,
    ) -> std::result::Result<PathBuf, FetchError> {
        let event = TransferEvent::new(self.repositories[0].url(), coordinate.file_name());
        listener.transfer_started(&event);

        if !self.jars.contains(&coordinate.to_string()) {
            listener.transfer_failed(&event);
            return Err(FetchError::ArtifactRetrieval {
                file: coordinate.file_name(),
            });
        }

        let path = self.local_repository.local_path_for(coordinate);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, coordinate.to_string()).unwrap();
        listener.transfer_succeeded(&event.with_content_length(16));
        Ok(path)
    }
}
