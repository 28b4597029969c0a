/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives (the fetch use case); outbound
/// ports are what the fetch core drives (resolution backend, local
/// repository, transfer listener, console and output).
pub mod inbound;
pub mod outbound;
