use crate::fetching::domain::{
    ArtifactDescriptor, Coordinate, Dependency, DependencyNode, RemoteRepository,
};
use crate::ports::outbound::TransferListener;
use crate::shared::error::FetchError;
use std::path::PathBuf;

/// DependencySelector port - the selection predicate handed to graph collection
///
/// The backend asks the selector about every dependency edge it encounters.
/// A rejected edge is not added to the graph and its subtree is never visited.
pub trait DependencySelector {
    /// Decides whether graph collection descends into `dependency`
    fn select_dependency(&mut self, dependency: &Dependency) -> bool;
}

/// ResolutionBackend port for the external dependency-resolution engine
///
/// This port abstracts repository I/O, descriptor parsing and transport.
/// Every call blocks the calling thread. Transfer activity is reported to the
/// listener passed into each call rather than to shared session state.
pub trait ResolutionBackend {
    /// Remote repositories consulted by this backend, in lookup order
    fn remote_repositories(&self) -> &[RemoteRepository];

    /// Resolves the most recent version of `group_id:artifact_id`
    ///
    /// # Errors
    /// Returns [`FetchError::CoordinateResolution`] if no repository reports a
    /// version
    fn resolve_latest_version(&self, group_id: &str, artifact_id: &str)
        -> Result<String, FetchError>;

    /// Reads the descriptor (dependencies and managed dependencies) of an artifact
    ///
    /// # Errors
    /// Returns [`FetchError::DescriptorRead`] if the descriptor exists but
    /// cannot be read
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        listener: &dyn TransferListener,
    ) -> Result<ArtifactDescriptor, FetchError>;

    /// Collects the transitive dependency graph of `root`
    ///
    /// # Arguments
    /// * `root` - The requested artifact
    /// * `descriptor` - Descriptor of `root`, as returned by `read_descriptor`
    /// * `selector` - Predicate applied to every dependency edge
    /// * `listener` - Receives transfer events for descriptors downloaded on the way
    ///
    /// # Errors
    /// Returns [`FetchError::GraphCollection`] if the graph cannot be built
    fn collect_graph(
        &self,
        root: &Coordinate,
        descriptor: &ArtifactDescriptor,
        selector: &mut dyn DependencySelector,
        listener: &dyn TransferListener,
    ) -> Result<DependencyNode, FetchError>;

    /// Makes the artifact file available in local storage, downloading it if absent
    ///
    /// # Returns
    /// The local path of the artifact file
    ///
    /// # Errors
    /// Returns [`FetchError::ArtifactRetrieval`] if no repository provides the file
    fn retrieve_artifact(
        &self,
        coordinate: &Coordinate,
        listener: &dyn TransferListener,
    ) -> Result<PathBuf, FetchError>;
}
