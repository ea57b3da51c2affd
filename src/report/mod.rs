/// Report domain layer
///
/// Pure data types and the report renderer. Nothing in this module performs
/// I/O or depends on ports or adapters.
pub mod domain;
pub mod services;
