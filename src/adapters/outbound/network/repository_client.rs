use crate::fetching::domain::{ProxySettings, RemoteRepository};
use crate::shared::security::read_repository_file;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 15;

/// RepositoryClient - reads files from remote repositories
///
/// `http(s)://` repositories go through a blocking reqwest client (proxy
/// and basic auth applied); `file://` repositories are read from disk.
/// A missing resource is `Ok(None)`, any other failure is an error.
pub struct RepositoryClient {
    client: Client,
    max_retries: u32,
}

impl RepositoryClient {
    /// Creates a client, routing http(s) traffic through `proxy` when given
    pub fn new(proxy: Option<&ProxySettings>) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent);

        if let Some(settings) = proxy {
            builder = builder.proxy(Self::build_proxy(settings)?);
        }

        Ok(Self {
            client: builder.build()?,
            max_retries: 3,
        })
    }

    fn build_proxy(settings: &ProxySettings) -> Result<reqwest::Proxy> {
        let mut proxy = reqwest::Proxy::all(settings.url())
            .map_err(|e| anyhow::anyhow!("Invalid proxy url '{}': {}", settings.url(), e))?;
        if let Some(credentials) = settings.credentials() {
            proxy = proxy.basic_auth(credentials.username(), credentials.password());
        }
        if !settings.exceptions().is_empty() {
            proxy = proxy.no_proxy(reqwest::NoProxy::from_string(&settings.exceptions().join(",")));
        }
        Ok(proxy)
    }

    /// Fetches `resource` (a repository-relative path) from `repository`
    ///
    /// # Returns
    /// `None` when the repository does not have the resource
    pub fn fetch(&self, repository: &RemoteRepository, resource: &str) -> Result<Option<Vec<u8>>> {
        let base = url::Url::parse(repository.url())
            .map_err(|e| anyhow::anyhow!("Invalid repository url '{}': {}", repository.url(), e))?;

        match base.scheme() {
            "file" => Self::fetch_file(&base, resource),
            "http" | "https" => self.fetch_with_retry(repository, resource),
            other => anyhow::bail!(
                "Unsupported repository protocol '{}' for {}",
                other,
                repository.id()
            ),
        }
    }

    fn fetch_file(base: &url::Url, resource: &str) -> Result<Option<Vec<u8>>> {
        let root = base
            .to_file_path()
            .map_err(|_| anyhow::anyhow!("Invalid file repository url '{}'", base))?;
        read_repository_file(&root.join(resource))
    }

    fn fetch_with_retry(
        &self,
        repository: &RemoteRepository,
        resource: &str,
    ) -> Result<Option<Vec<u8>>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_http(repository, resource) {
                Ok(content) => return Ok(content),
                Err(e) => {
                    tracing::debug!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt,
                        self.max_retries,
                        resource,
                        e
                    );
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No attempt made for {}", resource)))
    }

    fn fetch_http(&self, repository: &RemoteRepository, resource: &str) -> Result<Option<Vec<u8>>> {
        let url = Self::resource_url(repository.url(), resource);
        let mut request = self.client.get(&url);
        if let Some(credentials) = repository.credentials() {
            request = request.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let response = request.send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.bytes()?.to_vec())),
            status => anyhow::bail!("{} returned status code {}", url, status),
        }
    }

    /// Joins a repository url and a resource path, percent-encoding each segment
    fn resource_url(base: &str, resource: &str) -> String {
        let encoded: Vec<String> = resource
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", base.trim_end_matches('/'), encoded.join("/"))
    }
}
