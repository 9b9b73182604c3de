/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod credentials;
pub mod filesystem;
pub mod formatters;
pub mod network;
