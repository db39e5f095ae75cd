pub mod config;
pub mod network;

pub use config::RunConfig;
pub use network::{ForwardTrace, Network};
