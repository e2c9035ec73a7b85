pub mod client;
pub mod distribution;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod root;

pub use client::ClientConfig;
pub use distribution::DistributionConfig;
pub use errors::ConfigError;
pub use ingest::IngestConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
