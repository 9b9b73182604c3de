/// Network adapters - distributor stock APIs
mod farnell_client;
mod http;
mod mouser_client;

pub use farnell_client::{FarnellClient, DEFAULT_FARNELL_STORE};
pub use mouser_client::MouserClient;
