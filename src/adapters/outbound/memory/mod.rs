/// In-memory adapters
mod in_memory_source;

pub use in_memory_source::InMemoryGraphSource;
