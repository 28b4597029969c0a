use crate::fetching::domain::{Dependency, VisitedKey};
use crate::ports::outbound::DependencySelector;
use std::collections::HashSet;

/// Scopes fetched when a request does not name any
pub const DEFAULT_SCOPES: [&str; 2] = ["compile", "provided"];

/// Artifact keys already selected during one fetch
///
/// Shared by every root of the fetch and discarded afterwards.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: HashSet<VisitedKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &VisitedKey) -> bool {
        self.keys.contains(key)
    }

    /// Returns false if the key was already present
    pub fn insert(&mut self, key: VisitedKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Decision taken for one dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Accept,
    AlreadySelected,
    OptionalNotRequested,
    ScopeNotRequested,
}

/// DependencyFilter - pure selection rules of a fetch request
///
/// Rules, evaluated in order:
/// 1. an artifact key already selected in this fetch is rejected
/// 2. an optional dependency is rejected unless optionals were requested
/// 3. a non-empty scope outside the requested scopes is rejected
#[derive(Debug, Clone)]
pub struct DependencyFilter {
    scopes: Vec<String>,
    retrieve_optionals: bool,
}

impl DependencyFilter {
    pub fn new(scopes: Vec<String>, retrieve_optionals: bool) -> Self {
        Self {
            scopes,
            retrieve_optionals,
        }
    }

    pub fn decide(&self, dependency: &Dependency, visited: &VisitedSet) -> Selection {
        if visited.contains(&dependency.coordinate().visited_key()) {
            return Selection::AlreadySelected;
        }
        if dependency.is_optional() && !self.retrieve_optionals {
            return Selection::OptionalNotRequested;
        }
        let scope = dependency.scope();
        if !scope.is_empty() && !self.scopes.iter().any(|s| s == scope) {
            return Selection::ScopeNotRequested;
        }
        Selection::Accept
    }
}

impl Default for DependencyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(), false)
    }
}

/// SelectionSession - a [`DependencyFilter`] bound to the visited set it owns
/// for the duration of one fetch
///
/// Accepted keys are recorded before the backend descends into the
/// dependency's children.
pub struct SelectionSession<'a> {
    filter: &'a DependencyFilter,
    visited: &'a mut VisitedSet,
}

impl<'a> SelectionSession<'a> {
    pub fn new(filter: &'a DependencyFilter, visited: &'a mut VisitedSet) -> Self {
        Self { filter, visited }
    }
}

impl DependencySelector for SelectionSession<'_> {
    fn select_dependency(&mut self, dependency: &Dependency) -> bool {
        match self.filter.decide(dependency, self.visited) {
            Selection::Accept => {
                self.visited.insert(dependency.coordinate().visited_key());
                true
            }
            rejection => {
                tracing::trace!(
                    "Skipping {} ({:?})",
                    dependency.coordinate(),
                    rejection
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetching::domain::Coordinate;

    fn dependency(artifact_id: &str, scope: &str) -> Dependency {
        Dependency::new(Coordinate::new("g", artifact_id, "1.0"), scope)
    }

    fn compile_filter() -> DependencyFilter {
        DependencyFilter::new(vec!["compile".to_string()], false)
    }

    #[test]
    fn test_accepts_requested_scope() {
        let visited = VisitedSet::new();
        assert_eq!(
            compile_filter().decide(&dependency("a", "compile"), &visited),
            Selection::Accept
        );
    }

    #[test]
    fn test_accepts_empty_scope() {
        let visited = VisitedSet::new();
        assert_eq!(
            compile_filter().decide(&dependency("a", ""), &visited),
            Selection::Accept
        );
    }

    #[test]
    fn test_rejects_other_scope() {
        let visited = VisitedSet::new();
        assert_eq!(
            compile_filter().decide(&dependency("a", "test"), &visited),
            Selection::ScopeNotRequested
        );
    }

    #[test]
    fn test_optional_requires_opt_in() {
        let visited = VisitedSet::new();
        let optional = dependency("a", "compile").optional(true);

        assert_eq!(
            compile_filter().decide(&optional, &visited),
            Selection::OptionalNotRequested
        );
        let with_optionals = DependencyFilter::new(vec!["compile".to_string()], true);
        assert_eq!(with_optionals.decide(&optional, &visited), Selection::Accept);
    }

    #[test]
    fn test_dedup_takes_precedence() {
        let mut visited = VisitedSet::new();
        visited.insert(Coordinate::new("g", "a", "1.0").visited_key());

        assert_eq!(
            compile_filter().decide(&dependency("a", "test"), &visited),
            Selection::AlreadySelected
        );
    }

    #[test]
    fn test_decide_does_not_mutate() {
        let visited = VisitedSet::new();
        compile_filter().decide(&dependency("a", "compile"), &visited);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_session_records_accepted_keys_once() {
        let filter = compile_filter();
        let mut visited = VisitedSet::new();
        {
            let mut session = SelectionSession::new(&filter, &mut visited);
            assert!(session.select_dependency(&dependency("a", "compile")));
            assert!(!session.select_dependency(&dependency("a", "compile")));
            assert!(!session.select_dependency(&dependency("b", "test")));
        }
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_set_spans_sessions() {
        let filter = compile_filter();
        let mut visited = VisitedSet::new();

        assert!(SelectionSession::new(&filter, &mut visited)
            .select_dependency(&dependency("a", "compile")));
        assert!(!SelectionSession::new(&filter, &mut visited)
            .select_dependency(&dependency("a", "compile")));
    }

    #[test]
    fn test_default_scopes() {
        let filter = DependencyFilter::default();
        let visited = VisitedSet::new();
        assert_eq!(filter.decide(&dependency("a", "provided"), &visited), Selection::Accept);
        assert_eq!(
            filter.decide(&dependency("b", "runtime"), &visited),
            Selection::ScopeNotRequested
        );
    }
}
