mod edge;
mod identifier;

pub use edge::Edge;
pub use identifier::Identifier;
