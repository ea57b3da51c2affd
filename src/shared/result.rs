/// Result alias with anyhow::Error, used by the application layer and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
