use crate::fetching::domain::{is_excluded, DependencyNode, Exclusion, FetchedArtifact};
use crate::ports::outbound::LocalRepository;

/// ResultMaterializer - keeps the part of a dependency graph that exists locally
///
/// A node is turned into a [`FetchedArtifact`] only when its file is present
/// at the path the local repository layout expects. An absent node is
/// dropped but its children are still evaluated; surviving children take its
/// place in the parent's list. Excluded nodes are dropped with their subtree.
pub struct ResultMaterializer<'a, L: LocalRepository> {
    local_repository: &'a L,
    exclusions: &'a [Exclusion],
}

impl<'a, L: LocalRepository> ResultMaterializer<'a, L> {
    pub fn new(local_repository: &'a L, exclusions: &'a [Exclusion]) -> Self {
        Self {
            local_repository,
            exclusions,
        }
    }

    /// Materializes `node` and its subtree
    ///
    /// # Returns
    /// A single artifact when `node` is present locally; otherwise the
    /// materialized children of `node`, in order
    pub fn materialize(&self, node: &DependencyNode) -> Vec<FetchedArtifact> {
        if is_excluded(self.exclusions, node.coordinate()) {
            return Vec::new();
        }

        let children: Vec<FetchedArtifact> = node
            .children()
            .iter()
            .flat_map(|child| self.materialize(child))
            .collect();

        let path = self.local_repository.local_path_for(node.coordinate());
        if path.is_file() {
            vec![FetchedArtifact::new(node.coordinate(), path, children)]
        } else {
            tracing::debug!(
                "{} not present at {}, skipped",
                node.coordinate(),
                path.display()
            );
            children
        }
    }
}
