//! Tooltip payload attached to an indicator in the Warning case.

/// Marker added next to the Warning class while a tooltip is attached.
pub const TOOLTIP_MARKER: &str = "tooltip";

/// Hover text carried by a warning indicator.
///
/// The remote body is stored verbatim as plain text. It is untrusted: HTML
/// surfaces must render it through an auto-escaping template, never raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    text: String,
}

impl Tooltip {
    /// Wrap raw body text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, exactly as received.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
