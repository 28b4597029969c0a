/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the fetching services and reaches the
/// repositories and the console through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
