use super::{Coordinate, Exclusion};

/// A dependency edge as declared by an artifact descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    coordinate: Coordinate,
    scope: String,
    optional: bool,
    exclusions: Vec<Exclusion>,
}

impl Dependency {
    pub fn new(coordinate: Coordinate, scope: impl Into<String>) -> Self {
        Self {
            coordinate,
            scope: scope.into(),
            optional: false,
            exclusions: Vec::new(),
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<Exclusion>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Declared scope; empty when the descriptor did not name one
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    /// Replaces version and scope with the managed values, where present
    pub fn managed_by(mut self, managed: &Dependency) -> Self {
        self.coordinate = self.coordinate.with_version(managed.coordinate.version());
        if !managed.scope.is_empty() {
            self.scope = managed.scope.clone();
        }
        self
    }

    /// Whether this entry manages the given coordinate (same group, artifact,
    /// extension and classifier)
    pub fn manages(&self, coordinate: &Coordinate) -> bool {
        self.coordinate.group_id() == coordinate.group_id()
            && self.coordinate.artifact_id() == coordinate.artifact_id()
            && self.coordinate.extension() == coordinate.extension()
            && self.coordinate.classifier() == coordinate.classifier()
    }
}

/// Direct dependencies and dependency-version overrides of one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    dependencies: Vec<Dependency>,
    managed_dependencies: Vec<Dependency>,
}

impl ArtifactDescriptor {
    pub fn new(dependencies: Vec<Dependency>, managed_dependencies: Vec<Dependency>) -> Self {
        Self {
            dependencies,
            managed_dependencies,
        }
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn managed_dependencies(&self) -> &[Dependency] {
        &self.managed_dependencies
    }

    pub fn managed_entry_for(&self, coordinate: &Coordinate) -> Option<&Dependency> {
        self.managed_dependencies
            .iter()
            .find(|managed| managed.manages(coordinate))
    }
}

/// Node of a collected dependency graph
///
/// Read-only once the backend has built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    coordinate: Coordinate,
    scope: String,
    optional: bool,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Root node of a requested artifact (no scope, not optional)
    pub fn root(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            scope: String::new(),
            optional: false,
            children: Vec::new(),
        }
    }

    pub fn from_dependency(dependency: &Dependency) -> Self {
        Self {
            coordinate: dependency.coordinate.clone(),
            scope: dependency.scope.clone(),
            optional: dependency.optional,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DependencyNode::node_count).sum::<usize>()
    }
}
