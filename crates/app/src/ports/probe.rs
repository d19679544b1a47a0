//! Probe port — a single outbound HTTP GET.

use std::future::Future;

/// Boxed error source carried by [`TransportError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The request (or reading its body) did not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed")]
    Connect(#[source] BoxError),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// A status was received but the body could not be read.
    #[error("failed to read response body")]
    Body(#[source] BoxError),

    /// Any other request failure.
    #[error("request failed")]
    Request(#[source] BoxError),
}

/// A response whose status has been observed.
pub trait ProbeResponse: Send {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// Consume the response and read its full body as text.
    fn text(self) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// Performs one HTTP GET against an endpoint.
///
/// No request body or custom headers are sent. Implementations must not
/// retry: one call is one attempt.
pub trait Probe: Send + Sync {
    /// Response type produced by this probe.
    type Response: ProbeResponse;

    /// Send the request and wait for the response head.
    fn get(
        &self,
        endpoint: &str,
    ) -> impl Future<Output = Result<Self::Response, TransportError>> + Send;
}
