//! Probe outcome — what a single HTTP GET against an endpoint produced.

use crate::classification::Classification;

/// Result of one probe, consumed once by
/// [`Indicator::apply`](crate::indicator::Indicator::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered with an HTTP status.
    ///
    /// `body` is only read when the status maps to
    /// [`Classification::Warning`].
    Status { code: u16, body: Option<String> },
    /// The request never completed (DNS, refused connection, timeout, …).
    TransportFailure,
}

impl ProbeOutcome {
    /// Outcome for a status whose body was not read.
    #[must_use]
    pub fn status(code: u16) -> Self {
        Self::Status { code, body: None }
    }

    /// Outcome for a status together with its body text.
    #[must_use]
    pub fn status_with_body(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            body: Some(body.into()),
        }
    }

    /// Terminal classification this outcome leads to.
    #[must_use]
    pub fn classification(&self) -> Classification {
        match self {
            Self::Status { code, .. } => Classification::for_status(*code),
            Self::TransportFailure => Classification::Unknown,
        }
    }

    /// Whether the request failed before a status was observed.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_transport_failure_as_unknown() {
        assert_eq!(
            ProbeOutcome::TransportFailure.classification(),
            Classification::Unknown
        );
    }

    #[test]
    fn should_classify_status_through_status_table() {
        assert_eq!(
            ProbeOutcome::status(503).classification(),
            Classification::Error
        );
        assert_eq!(
            ProbeOutcome::status_with_body(500, "boom").classification(),
            Classification::Warning
        );
    }

    #[test]
    fn should_only_report_transport_failure_for_failed_requests() {
        assert!(ProbeOutcome::TransportFailure.is_transport_failure());
        assert!(!ProbeOutcome::status(400).is_transport_failure());
    }
}
