//! HTTP probe adapter error types.

use labdot_app::ports::TransportError;

/// Errors raised while setting up the probe.
///
/// Probe *calls* never fail with this type; they report
/// [`TransportError`] through the port.
#[derive(Debug, thiserror::Error)]
pub enum HttpProbeError {
    /// The reqwest client could not be built (TLS backend, etc.).
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

/// Classify a reqwest failure for the probe port.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(Box::new(err))
    } else if err.is_body() || err.is_decode() {
        TransportError::Body(Box::new(err))
    } else {
        TransportError::Request(Box::new(err))
    }
}
