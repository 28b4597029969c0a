pub mod coordinate;
pub mod dependency_graph;
pub mod fetched_artifact;
pub mod repository;

pub use coordinate::{is_excluded, Coordinate, Exclusion, VisitedKey, LATEST_VERSION};
pub use dependency_graph::{ArtifactDescriptor, Dependency, DependencyNode};
pub use fetched_artifact::FetchedArtifact;
pub use repository::{Credentials, ProxySettings, RemoteRepository};
