/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: console progress,
/// report output, formatters and the Maven 2 repository backend.
pub mod outbound;
