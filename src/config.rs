//! Configuration of remote repositories, local repository and proxy.
//!
//! Settings come from a YAML file (`maven-fetcher.config.yml`) and/or a
//! property map using the keys in [`properties`], and end up in a
//! [`FetcherConfig`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fetching::domain::{Credentials, ProxySettings, RemoteRepository};
use crate::shared::error::FetchError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "maven-fetcher.config.yml";

/// Keys understood by [`FetcherConfig::with_properties`]
pub mod properties {
    /// `;`-separated list of `id=url` or `id=url [user:pwd]`
    pub const REMOTE_REPOSITORIES: &str = "remoteRepositories";
    /// `true` or `false`
    pub const USE_DEFAULT_REMOTE_REPOSITORY: &str = "useDefaultRemoteRepository";
    pub const LOCAL_REPOSITORY: &str = "localRepository";
    pub const PROXY_URL: &str = "proxy.url";
    pub const PROXY_USERNAME: &str = "proxy.username";
    pub const PROXY_PASSWORD: &str = "proxy.password";
    /// `;`-separated list of hosts reached without the proxy
    pub const PROXY_EXCEPTIONS: &str = "proxy.exceptions";
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub remote_repositories: Option<Vec<String>>,
    pub use_default_remote_repository: Option<bool>,
    pub local_repository: Option<PathBuf>,
    pub proxy: Option<ProxyConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Proxy section of the configuration file.
#[derive(Debug, Deserialize)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// `~/.m2/repository`, or `.m2/repository` when no home directory is known
pub fn default_local_repository() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".m2").join("repository"))
        .unwrap_or_else(|| PathBuf::from(".m2").join("repository"))
}

/// Resolved fetcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    remote_repositories: Vec<RemoteRepository>,
    local_repository: PathBuf,
    proxy: Option<ProxySettings>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            remote_repositories: vec![RemoteRepository::maven_central()],
            local_repository: default_local_repository(),
            proxy: None,
        }
    }
}

impl FetcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_remote_repositories(mut self) -> Self {
        self.remote_repositories.clear();
        self
    }

    /// Adds a repository, keeping prioritized repositories first (ascending)
    /// and the rest in insertion order
    pub fn add_remote_repository(mut self, repository: RemoteRepository) -> Self {
        self.remote_repositories.push(repository);
        self.remote_repositories
            .sort_by_key(|r| r.get_priority().map_or((1, 0), |p| (0, p)));
        self
    }

    pub fn local_repository_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_repository = path.into();
        self
    }

    pub fn proxy(mut self, proxy: ProxySettings) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn remote_repositories(&self) -> &[RemoteRepository] {
        &self.remote_repositories
    }

    /// Human-readable description of every remote repository, in lookup order
    pub fn remote_repository_descriptions(&self) -> Vec<String> {
        self.remote_repositories.iter().map(ToString::to_string).collect()
    }

    pub fn local_repository(&self) -> &Path {
        &self.local_repository
    }

    pub fn get_proxy(&self) -> Option<&ProxySettings> {
        self.proxy.as_ref()
    }

    /// Applies a property map (see [`properties`])
    ///
    /// # Errors
    /// Returns [`FetchError::ConfigurationParse`] naming the offending key
    pub fn with_properties(
        self,
        props: &HashMap<String, String>,
    ) -> std::result::Result<Self, FetchError> {
        let get = |key: &str| props.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let use_default = get(properties::USE_DEFAULT_REMOTE_REPOSITORY)
            .map(|value| parse_bool(properties::USE_DEFAULT_REMOTE_REPOSITORY, value))
            .transpose()?;
        let repositories = get(properties::REMOTE_REPOSITORIES)
            .map(|value| split_list(value).map(String::from).collect::<Vec<_>>());

        let proxy = match get(properties::PROXY_URL) {
            Some(url) => Some(build_proxy(
                url,
                get(properties::PROXY_USERNAME),
                get(properties::PROXY_PASSWORD),
                get(properties::PROXY_EXCEPTIONS)
                    .map(|v| split_list(v).map(String::from).collect())
                    .unwrap_or_default(),
            )),
            None => None,
        };

        self.apply(
            use_default,
            repositories.as_deref(),
            properties::REMOTE_REPOSITORIES,
            get(properties::LOCAL_REPOSITORY).map(PathBuf::from),
            proxy,
        )
    }

    /// Applies a loaded configuration file
    ///
    /// # Errors
    /// Returns [`FetchError::ConfigurationParse`] if a repository entry is invalid
    pub fn with_config_file(self, file: &ConfigFile) -> std::result::Result<Self, FetchError> {
        let proxy = file.proxy.as_ref().map(|p| {
            build_proxy(
                &p.url,
                p.username.as_deref(),
                p.password.as_deref(),
                p.exceptions.clone(),
            )
        });

        self.apply(
            file.use_default_remote_repository,
            file.remote_repositories.as_deref(),
            "remote_repositories",
            file.local_repository.clone(),
            proxy,
        )
    }

    fn apply(
        mut self,
        use_default: Option<bool>,
        repositories: Option<&[String]>,
        repositories_key: &str,
        local_repository: Option<PathBuf>,
        proxy: Option<ProxySettings>,
    ) -> std::result::Result<Self, FetchError> {
        if use_default == Some(false) {
            self.remote_repositories
                .retain(|r| *r != RemoteRepository::maven_central());
        }

        for value in repositories.unwrap_or_default() {
            let repository =
                RemoteRepository::parse(value).map_err(|e| FetchError::ConfigurationParse {
                    property: repositories_key.to_string(),
                    details: e.to_string(),
                })?;
            self = self.add_remote_repository(repository);
        }

        if let Some(path) = local_repository {
            self = self.local_repository_path(path);
        }
        if let Some(proxy) = proxy {
            self = self.proxy(proxy);
        }
        Ok(self)
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, FetchError> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FetchError::ConfigurationParse {
            property: key.to_string(),
            details: format!("expected 'true' or 'false', got '{}'", value),
        }),
    }
}

/// Credentials are only applied when both username and password are given
fn build_proxy(
    url: &str,
    username: Option<&str>,
    password: Option<&str>,
    exceptions: Vec<String>,
) -> ProxySettings {
    let mut proxy = ProxySettings::new(url.trim()).with_exceptions(exceptions);
    if let (Some(username), Some(password)) = (username, password) {
        proxy = proxy.with_credentials(Credentials::new(username, password));
    }
    proxy
}
