/// Use cases module containing application business logic orchestration
mod fetch_artifacts;

pub use fetch_artifacts::FetchArtifactsUseCase;
