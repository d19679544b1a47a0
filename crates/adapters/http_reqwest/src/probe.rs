//! Reqwest implementation of the [`Probe`] port.

use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

use labdot_app::ports::{Probe, ProbeResponse, TransportError};

use crate::config::HttpProbeConfig;
use crate::error::{HttpProbeError, transport_error};

/// Probe that sends one plain `GET` per call through a shared client.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    /// Build a probe from configuration.
    ///
    /// Redirects are never followed: a `3xx` answer is reported as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpProbeError::Build`] if the client cannot be created.
    pub fn new(config: &HttpProbeConfig) -> Result<Self, HttpProbeError> {
        let mut builder = Client::builder()
            .redirect(Policy::none())
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(HttpProbeError::Build)?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Response head returned by [`ReqwestProbe`].
#[derive(Debug)]
pub struct ReqwestResponse(reqwest::Response);

impl ProbeResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn text(self) -> Result<String, TransportError> {
        self.0.text().await.map_err(|err| {
            if err.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Body(Box::new(err))
            }
        })
    }
}

impl Probe for ReqwestProbe {
    type Response = ReqwestResponse;

    async fn get(&self, endpoint: &str) -> Result<ReqwestResponse, TransportError> {
        tracing::trace!(endpoint, "sending probe");
        self.client
            .get(endpoint)
            .send()
            .await
            .map(ReqwestResponse)
            .map_err(transport_error)
    }
}
