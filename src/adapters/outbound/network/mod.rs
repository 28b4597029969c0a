/// Network adapters for remote repository access
mod repository_client;

pub use repository_client::RepositoryClient;
