//! maven-fetcher - fetch Maven artifacts and their transitive dependencies
//!
//! Given artifact coordinates, the library resolves each artifact's
//! dependency graph against a list of remote repositories, downloads the
//! selected artifacts into a local repository and reports what was fetched
//! as a tree, together with any errors met along the way.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fetching`): coordinates, dependency graphs, selection rules
//! - **Application Layer** (`application`): the fetch use case, request/result DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Maven 2 repository backend, console, output
//! - **Configuration** (`config`): repositories, local repository, proxy
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use maven_fetcher::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = FetcherConfig::new().local_repository_path("target/m2");
//!
//! let local_repository = Maven2LocalRepository::new(config.local_repository());
//! let backend = Maven2RepositoryBackend::new(
//!     RepositoryClient::new(config.get_proxy())?,
//!     config.remote_repositories().to_vec(),
//!     local_repository.clone(),
//! );
//! let use_case =
//!     FetchArtifactsUseCase::new(backend, local_repository, StderrProgressReporter::new());
//!
//! let request = FetchRequest::new(["org.apache.maven:maven-artifact:3.9.1"]).scopes(["compile"]);
//! let result = use_case.execute(request)?;
//!
//! println!("{}", TextTreeFormatter::new().format(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod fetching;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextTreeFormatter};
    pub use crate::adapters::outbound::network::RepositoryClient;
    pub use crate::adapters::outbound::repository::{Maven2LocalRepository, Maven2RepositoryBackend};
    pub use crate::application::dto::{FetchRequest, FetchResult, OutputFormat, RootOutcome};
    pub use crate::application::use_cases::FetchArtifactsUseCase;
    pub use crate::config::FetcherConfig;
    pub use crate::fetching::domain::{
        ArtifactDescriptor, Coordinate, Credentials, Dependency, DependencyNode, Exclusion,
        FetchedArtifact, ProxySettings, RemoteRepository,
    };
    pub use crate::ports::inbound::ArtifactFetchPort;
    pub use crate::ports::outbound::{
        DependencySelector, FetchResultFormatter, LocalRepository, OutputPresenter,
        ProgressReporter, ResolutionBackend, TransferEvent, TransferListener,
    };
    pub use crate::shared::error::FetchError;
    pub use crate::shared::Result;
}
