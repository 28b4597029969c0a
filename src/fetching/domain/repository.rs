use crate::shared::error::FetchError;
use std::fmt;

pub const MAVEN_CENTRAL_ID: &str = "maven-central";
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Username/password pair for a repository or proxy
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A remote Maven repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    id: String,
    url: String,
    credentials: Option<Credentials>,
    priority: Option<i32>,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into().trim_end_matches('/').to_string(),
            credentials: None,
            priority: None,
        }
    }

    pub fn maven_central() -> Self {
        Self::new(MAVEN_CENTRAL_ID, MAVEN_CENTRAL_URL)
    }

    /// Parses `id=url` or `id=url [user:pwd]`
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidRepository`] for any other shape, or when
    /// the url part is not an absolute URL.
    pub fn parse(value: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidRepository {
            value: value.to_string(),
        };

        let (id, rest) = value.trim().split_once('=').ok_or_else(invalid)?;
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let rest = rest.trim();
        let (url, credentials) = match rest.find(" [") {
            Some(start) if rest.ends_with(']') => {
                let inner = &rest[start + 2..rest.len() - 1];
                let (username, password) = inner.split_once(':').ok_or_else(invalid)?;
                if username.is_empty() {
                    return Err(invalid());
                }
                (rest[..start].trim(), Some(Credentials::new(username, password)))
            }
            Some(_) => return Err(invalid()),
            None => (rest, None),
        };

        if url.is_empty() || url.contains(char::is_whitespace) {
            return Err(invalid());
        }
        url::Url::parse(url).map_err(|_| invalid())?;

        let mut repository = Self::new(id, url);
        repository.credentials = credentials;
        Ok(repository)
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Lower values are consulted first
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn get_priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

impl fmt::Display for RemoteRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, default, releases+snapshots)", self.id, self.url)
    }
}

/// Outbound HTTP proxy settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    url: String,
    credentials: Option<Credentials>,
    exceptions: Vec<String>,
}

impl ProxySettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: None,
            exceptions: Vec::new(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Hosts reached without the proxy
    pub fn with_exceptions(mut self, exceptions: Vec<String>) -> Self {
        self.exceptions = exceptions
            .into_iter()
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .collect();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }
}
