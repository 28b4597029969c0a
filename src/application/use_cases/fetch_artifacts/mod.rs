use crate::application::dto::{FetchRequest, FetchResult, RootOutcome};
use crate::fetching::domain::{is_excluded, Coordinate, DependencyNode, Exclusion};
use crate::fetching::services::{
    CoordinateParser, DependencyFilter, ResultMaterializer, SelectionSession, TransferTracker,
    VisitedSet,
};
use crate::ports::inbound::ArtifactFetchPort;
use crate::ports::outbound::{LocalRepository, ProgressReporter, ResolutionBackend};
use crate::shared::error::FetchError;
use crate::shared::Result;

/// Mutable state shared by every root of one fetch
struct FetchSession<'a> {
    filter: DependencyFilter,
    visited: VisitedSet,
    tracker: TransferTracker,
    exclusions: &'a [Exclusion],
}

/// FetchArtifactsUseCase - Core use case fetching artifacts with their dependencies
///
/// For every requested root the descriptor is read, the dependency graph is
/// collected through the request's selection rules, every non-excluded node
/// is retrieved and the locally present part of the graph is materialized.
/// A failure on one root is recorded on that root's outcome and the
/// remaining roots are still processed.
///
/// # Type Parameters
/// * `B` - ResolutionBackend implementation
/// * `L` - LocalRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchArtifactsUseCase<B, L, PR> {
    backend: B,
    local_repository: L,
    progress_reporter: PR,
}

impl<B, L, PR> FetchArtifactsUseCase<B, L, PR>
where
    B: ResolutionBackend,
    L: LocalRepository,
    PR: ProgressReporter,
{
    /// Creates a new FetchArtifactsUseCase with injected dependencies
    pub fn new(backend: B, local_repository: L, progress_reporter: PR) -> Self {
        Self {
            backend,
            local_repository,
            progress_reporter,
        }
    }

    /// Executes the fetch
    ///
    /// # Errors
    /// Returns a [`FetchError`] before anything is fetched when an exclusion
    /// or coordinate is malformed, or a version cannot be resolved
    pub fn execute(&self, request: FetchRequest) -> Result<FetchResult> {
        // Step 1: Interpret exclusions and coordinates
        let exclusions = Self::parse_exclusions(&request)?;
        let roots = self.resolve_roots(&request)?;

        // Step 2: Announce where artifacts come from
        self.log_repositories();

        // Step 3: Fetch each root with one shared selection state
        let mut session = FetchSession {
            filter: DependencyFilter::new(
                request.get_scopes().to_vec(),
                request.is_retrieving_optionals(),
            ),
            visited: VisitedSet::new(),
            tracker: TransferTracker::new(),
            exclusions: &exclusions,
        };

        let total = roots.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, root) in roots.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(&root.to_string()));
            outcomes.push(self.fetch_root(root, &mut session));
        }
        self.progress_reporter.report_progress(total, total, None);

        let result = FetchResult::new(outcomes);
        self.report_summary(&result);
        Ok(result)
    }

    fn parse_exclusions(request: &FetchRequest) -> Result<Vec<Exclusion>> {
        let exclusions = request
            .exclusions()
            .iter()
            .map(|e| CoordinateParser::parse_exclusion(e))
            .collect::<std::result::Result<Vec<_>, FetchError>>()?;
        Ok(exclusions)
    }

    fn resolve_roots(&self, request: &FetchRequest) -> Result<Vec<Coordinate>> {
        let mut roots = Vec::with_capacity(request.artifacts().len());
        for coordinates in request.artifacts() {
            let root = CoordinateParser::resolve(coordinates, |group_id, artifact_id| {
                self.backend.resolve_latest_version(group_id, artifact_id)
            })?;
            if root.to_string() != *coordinates {
                tracing::info!("Resolved {} as {}", coordinates, root);
            }
            roots.push(root);
        }
        Ok(roots)
    }

    fn log_repositories(&self) {
        tracing::info!("Using the following repositories:");
        for repository in self.backend.remote_repositories() {
            if repository.is_authenticated() {
                tracing::info!("- {} [{}] (authenticated)", repository.id(), repository.url());
            } else {
                tracing::info!("- {} [{}]", repository.id(), repository.url());
            }
        }
    }

    fn fetch_root(&self, root: &Coordinate, session: &mut FetchSession<'_>) -> RootOutcome {
        let mut outcome = RootOutcome::new(root.to_string());

        let graph = match self.collect(root, session) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!("{}", e);
                let summary = e.to_string();
                self.progress_reporter.report_error(&format!(
                    "❌ {}",
                    summary.lines().next().unwrap_or_default()
                ));
                outcome.push_error(e);
                return outcome;
            }
        };
        tracing::debug!("{} resolved to {} node(s)", root, graph.node_count());

        let mut reported = Vec::new();
        self.retrieve(&graph, session, &mut outcome, &mut reported);

        for file in session.tracker.take_failed_transfers() {
            if !reported.contains(&file) {
                outcome.push_error(FetchError::ArtifactRetrieval { file: file.clone() });
                reported.push(file);
            }
        }

        let artifacts =
            ResultMaterializer::new(&self.local_repository, session.exclusions).materialize(&graph);
        outcome.with_artifacts(artifacts)
    }

    fn collect(
        &self,
        root: &Coordinate,
        session: &mut FetchSession<'_>,
    ) -> std::result::Result<DependencyNode, FetchError> {
        let descriptor = self.backend.read_descriptor(root, &session.tracker)?;
        // The root is never offered to the selector
        session.visited.insert(root.visited_key());
        let mut selector = SelectionSession::new(&session.filter, &mut session.visited);
        self.backend
            .collect_graph(root, &descriptor, &mut selector, &session.tracker)
    }

    /// Retrieves `node` and its subtree, depth-first; an excluded node is
    /// skipped together with its subtree
    fn retrieve(
        &self,
        node: &DependencyNode,
        session: &FetchSession<'_>,
        outcome: &mut RootOutcome,
        reported: &mut Vec<String>,
    ) {
        if is_excluded(session.exclusions, node.coordinate()) {
            tracing::debug!("{} is excluded", node.coordinate());
            return;
        }

        if let Err(e) = self.backend.retrieve_artifact(node.coordinate(), &session.tracker) {
            if let FetchError::ArtifactRetrieval { file } = &e {
                reported.push(file.clone());
            }
            outcome.push_error(e);
        }

        for child in node.children() {
            self.retrieve(child, session, outcome, reported);
        }
    }

    fn report_summary(&self, result: &FetchResult) {
        let fetched = result.all_artifacts().count();
        let errors = result.errors().count();
        if errors == 0 {
            self.progress_reporter
                .report_completion(&format!("✅ Fetched {} artifact(s)", fetched));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  Fetched {} artifact(s) with {} error(s)",
                fetched, errors
            ));
        }
    }
}

impl<B, L, PR> ArtifactFetchPort for FetchArtifactsUseCase<B, L, PR>
where
    B: ResolutionBackend,
    L: LocalRepository,
    PR: ProgressReporter,
{
    fn fetch(&self, request: FetchRequest) -> Result<FetchResult> {
        self.execute(request)
    }
}
