//! Classification — the status marker carried by an indicator.

use serde::{Deserialize, Serialize};

/// Status marker applied to an [`Indicator`](crate::indicator::Indicator).
///
/// [`Loading`](Self::Loading) is the initial marker; the other four are
/// terminal and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Loading,
    Success,
    Error,
    Unknown,
    Warning,
}

impl Classification {
    /// The terminal classifications, cleared before any new one is applied.
    pub const TERMINAL: [Self; 4] = [Self::Success, Self::Error, Self::Warning, Self::Unknown];

    /// Map an HTTP status code to the classification it produces.
    ///
    /// | Status | Classification |
    /// |---|---|
    /// | 200 | Success |
    /// | 503 | Error |
    /// | 400, 403 | Unknown |
    /// | anything else | Warning |
    #[must_use]
    pub fn for_status(code: u16) -> Self {
        match code {
            200 => Self::Success,
            503 => Self::Error,
            400 | 403 => Self::Unknown,
            _ => Self::Warning,
        }
    }

    /// Whether this is one of the four terminal classifications.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Marker name used by the dashboard markup (e.g. `success-dot`).
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Loading => "loading-dot",
            Self::Success => "success-dot",
            Self::Error => "error-dot",
            Self::Unknown => "unknown-dot",
            Self::Warning => "warning-dot",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
            Self::Unknown => "unknown",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_200_as_success() {
        assert_eq!(Classification::for_status(200), Classification::Success);
    }

    #[test]
    fn should_classify_503_as_error() {
        assert_eq!(Classification::for_status(503), Classification::Error);
    }

    #[test]
    fn should_classify_400_and_403_as_unknown() {
        assert_eq!(Classification::for_status(400), Classification::Unknown);
        assert_eq!(Classification::for_status(403), Classification::Unknown);
    }

    #[test]
    fn should_classify_other_statuses_as_warning() {
        for code in [201, 204, 301, 302, 401, 404, 429, 500, 502, 504] {
            assert_eq!(
                Classification::for_status(code),
                Classification::Warning,
                "status {code}"
            );
        }
    }

    #[test]
    fn should_not_list_loading_as_terminal() {
        assert!(!Classification::Loading.is_terminal());
        assert!(Classification::TERMINAL.iter().all(|c| c.is_terminal()));
    }

    #[test]
    fn should_expose_dashboard_marker_names() {
        assert_eq!(Classification::Loading.css_class(), "loading-dot");
        assert_eq!(Classification::Warning.css_class(), "warning-dot");
    }

    #[test]
    fn should_serialize_lowercase() {
        let json = serde_json::to_string(&Classification::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
        assert_eq!(Classification::Success.to_string(), "success");
    }
}
