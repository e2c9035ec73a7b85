use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unix socket on which a dnstap producer delivers Frame Streams data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,

    /// Reply ACCEPT to READY and FINISH to STOP. Off for unidirectional producers.
    #[serde(default = "default_true")]
    pub bidirectional: bool,

    /// Data frames above this many bytes end the connection.
    #[serde(default = "default_max_frame_size")]
    pub max_frame_size: u32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            bidirectional: true,
            max_frame_size: default_max_frame_size(),
        }
    }
}

fn default_socket_path() -> PathBuf {
    PathBuf::from("/var/run/dnstap.sock")
}

fn default_true() -> bool {
    true
}

fn default_max_frame_size() -> u32 {
    1024 * 1024
}
