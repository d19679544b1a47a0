//! HTTP probe configuration.

use serde::Deserialize;

/// Configuration for the reqwest-backed probe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpProbeConfig {
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Accept self-signed or otherwise invalid TLS certificates.
    pub accept_invalid_certs: bool,
}
