/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach
/// graph data, formatters, output destinations, and the console.
pub mod outbound;
