use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to tell a partial fetch apart
/// from a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested artifact was fetched without errors
    Success = 0,
    /// The fetch completed but recorded at least one error
    FetchErrors = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, malformed coordinates, I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FetchErrors => write!(f, "Fetch Errors (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while configuring the fetcher or fetching artifacts.
///
/// Coordinate and configuration errors are returned to the caller right away.
/// Retrieval, descriptor and graph errors are collected per requested root
/// and exposed through the fetch result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Malformed coordinates '{coordinates}': {reason}\n\n💡 Hint: Expected <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version> or <groupId>:<artifactId>")]
    MalformedCoordinate { coordinates: String, reason: String },

    #[error("Cannot resolve artifact version for '{coordinates}': {details}\n\n💡 Hint: Specify the version explicitly as <groupId>:<artifactId>:<version>")]
    CoordinateResolution { coordinates: String, details: String },

    #[error("Could not fetch artifact {file}")]
    ArtifactRetrieval { file: String },

    #[error("Failed to read artifact descriptor for {coordinates}\nDetails: {details}")]
    DescriptorRead { coordinates: String, details: String },

    #[error("Failed to collect dependencies of {coordinates}\nDetails: {details}")]
    GraphCollection { coordinates: String, details: String },

    #[error("Invalid value for property '{property}' : {details}")]
    ConfigurationParse { property: String, details: String },

    #[error("Invalid repository value '{value}'\nExpected formats are 'id=url' and 'id=url [user:pwd]'")]
    InvalidRepository { value: String },

    #[error("Failed to write to file: {}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions", path.display())]
    FileWriteError { path: PathBuf, details: String },
}
