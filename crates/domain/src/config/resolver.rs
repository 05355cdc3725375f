use serde::{Deserialize, Serialize};

/// Upstream server and query behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// `host:port` of the server queries are sent to.
    #[serde(default = "default_server")]
    pub server: String,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total attempts before giving up; only timeouts are retried.
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    #[serde(default)]
    pub recursion_desired: bool,

    /// Fixed transaction ID; a random one is drawn per query when unset.
    #[serde(default)]
    pub transaction_id: Option<u16>,

    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
            recursion_desired: false,
            transaction_id: None,
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_attempts() -> u32 {
    2
}

fn default_recv_buffer_size() -> usize {
    1024
}
