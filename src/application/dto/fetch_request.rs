use crate::fetching::services::DEFAULT_SCOPES;

/// FetchRequest - what to fetch and which dependencies to follow
///
/// Built once with the consuming builder methods and then handed to a
/// single fetch. Root coordinates keep their first-seen order; duplicates
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    artifacts: Vec<String>,
    scopes: Vec<String>,
    retrieve_optionals: bool,
    exclusions: Vec<String>,
}

impl FetchRequest {
    /// Creates a request for the given root coordinates with the default
    /// scopes (`compile`, `provided`), no optionals and no exclusions
    pub fn new<I, S>(artifacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            artifacts: dedup(artifacts),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            retrieve_optionals: false,
            exclusions: Vec::new(),
        }
    }

    /// Replaces the scopes to follow
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = dedup(scopes);
        self
    }

    /// Adds `groupId:artifactId` exclusions
    pub fn excluding_artifacts<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for exclusion in exclusions {
            let exclusion = exclusion.into();
            if !self.exclusions.contains(&exclusion) {
                self.exclusions.push(exclusion);
            }
        }
        self
    }

    pub fn retrieving_optionals(mut self, retrieve_optionals: bool) -> Self {
        self.retrieve_optionals = retrieve_optionals;
        self
    }

    pub fn artifacts(&self) -> &[String] {
        &self.artifacts
    }

    pub fn get_scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn is_retrieving_optionals(&self) -> bool {
        self.retrieve_optionals
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }
}

fn dedup<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut result: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}
