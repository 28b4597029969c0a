/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod artifact_fetch_port;

pub use artifact_fetch_port::ArtifactFetchPort;
