pub mod coordinate_parser;
pub mod dependency_filter;
pub mod result_materializer;
pub mod transfer_tracker;

pub use coordinate_parser::{CoordinateParser, ParsedCoordinate};
pub use dependency_filter::{
    DependencyFilter, Selection, SelectionSession, VisitedSet, DEFAULT_SCOPES,
};
pub use result_materializer::ResultMaterializer;
pub use transfer_tracker::TransferTracker;
