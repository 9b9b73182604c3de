/// Ports module defining interfaces for hexagonal architecture
///
/// The application core depends only on these outbound (driven) ports;
/// adapters implement them.
pub mod outbound;
