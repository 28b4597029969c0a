/// Application-level result. Domain errors ([`crate::shared::error::FetchError`])
/// convert into it with `?` and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
