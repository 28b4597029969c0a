/// Maven 2 repository adapters: layout, descriptors and the resolution backend
mod layout;
mod maven2_backend;
mod metadata;
mod pom;

pub use layout::Maven2LocalRepository;
pub use maven2_backend::{Maven2RepositoryBackend, MAX_GRAPH_DEPTH};
