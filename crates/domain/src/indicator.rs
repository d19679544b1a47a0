//! Indicator — the dot shown on the dashboard for one monitored endpoint.
//!
//! An indicator starts out [`Loading`](Classification::Loading). Each probe
//! moves it to exactly one terminal classification through
//! [`Indicator::apply`].

mod tooltip;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use tooltip::{TOOLTIP_MARKER, Tooltip};

use crate::classification::Classification;
use crate::id::IndicatorId;
use crate::probe::ProbeOutcome;
use crate::time::Timestamp;
use crate::uptime::UptimeMatrix;

/// What happens to the Loading marker when the probe never completed.
///
/// The dashboard historically left Loading in place on network failures
/// while clearing it on every other path. Both behaviours are kept
/// selectable; [`ClearOnFailure`](Self::ClearOnFailure) is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingPolicy {
    /// Remove Loading on every terminal transition.
    #[default]
    ClearOnFailure,
    /// Leave Loading in place after a transport failure.
    KeepOnFailure,
}

/// A status indicator and the markers currently applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Stable key of this indicator.
    pub id: IndicatorId,
    classes: BTreeSet<Classification>,
    tooltip: Option<Tooltip>,
    uptime: UptimeMatrix,
    /// When the last probe outcome was applied.
    pub last_checked: Option<Timestamp>,
}

impl Indicator {
    /// Create an indicator in its initial Loading state.
    #[must_use]
    pub fn new(id: IndicatorId) -> Self {
        Self {
            id,
            classes: BTreeSet::from([Classification::Loading]),
            tooltip: None,
            uptime: UptimeMatrix::new(),
            last_checked: None,
        }
    }

    /// All markers currently applied, in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = Classification> + '_ {
        self.classes.iter().copied()
    }

    /// Whether the given marker is applied.
    #[must_use]
    pub fn has(&self, classification: Classification) -> bool {
        self.classes.contains(&classification)
    }

    /// Whether the Loading marker is still applied.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.has(Classification::Loading)
    }

    /// The active terminal classification, or Loading if none was applied yet.
    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classes
            .iter()
            .copied()
            .find(|class| class.is_terminal())
            .unwrap_or(Classification::Loading)
    }

    /// Tooltip attached by the last Warning transition, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// CSS marker classes for the dashboard: one per applied marker, plus
    /// [`TOOLTIP_MARKER`] while a tooltip is attached.
    #[must_use]
    pub fn markers(&self) -> Vec<&'static str> {
        let mut markers: Vec<&'static str> = self.classes().map(Classification::css_class).collect();
        if self.tooltip.is_some() {
            markers.push(TOOLTIP_MARKER);
        }
        markers
    }

    /// Uptime samples recorded so far.
    #[must_use]
    pub fn uptime(&self) -> &UptimeMatrix {
        &self.uptime
    }

    /// Forget all uptime samples.
    pub fn reset_uptime(&mut self, at: Timestamp) {
        self.uptime.reset(at);
    }

    /// Apply a probe outcome and return the resulting classification.
    ///
    /// All terminal markers are removed before the new one is added, so at
    /// most one is ever present. A Warning replaces any previous tooltip with
    /// the response body; every other outcome drops it. Loading is removed
    /// unless the request failed and `policy` says to keep it. The outcome
    /// is also recorded as one uptime sample.
    pub fn apply(
        &mut self,
        outcome: ProbeOutcome,
        policy: LoadingPolicy,
        at: Timestamp,
    ) -> Classification {
        let next = outcome.classification();
        let keep_loading =
            outcome.is_transport_failure() && policy == LoadingPolicy::KeepOnFailure;

        for class in Classification::TERMINAL {
            self.classes.remove(&class);
        }
        self.classes.insert(next);

        self.tooltip = match outcome {
            ProbeOutcome::Status { body, .. } if next == Classification::Warning => {
                Some(Tooltip::new(body.unwrap_or_default()))
            }
            _ => None,
        };

        if !keep_loading {
            self.classes.remove(&Classification::Loading);
        }
        self.uptime.record(next, at);
        self.last_checked = Some(at);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn indicator() -> Indicator {
        Indicator::new(IndicatorId::new("nas").unwrap())
    }

    fn terminal_markers(indicator: &Indicator) -> Vec<Classification> {
        indicator.classes().filter(|c| c.is_terminal()).collect()
    }

    #[test]
    fn should_start_loading_with_no_terminal_marker() {
        let ind = indicator();
        assert!(ind.is_loading());
        assert_eq!(ind.classification(), Classification::Loading);
        assert!(terminal_markers(&ind).is_empty());
        assert!(ind.last_checked.is_none());
    }

    #[test]
    fn should_end_in_success_and_drop_loading_on_200() {
        let mut ind = indicator();
        let class = ind.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        assert_eq!(class, Classification::Success);
        assert_eq!(terminal_markers(&ind), vec![Classification::Success]);
        assert!(!ind.is_loading());
        assert!(ind.tooltip().is_none());
        assert!(ind.last_checked.is_some());
    }

    #[test]
    fn should_end_in_error_on_503() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::status(503), LoadingPolicy::default(), now());
        assert_eq!(terminal_markers(&ind), vec![Classification::Error]);
        assert!(!ind.is_loading());
    }

    #[test]
    fn should_end_in_unknown_on_400_and_403() {
        for code in [400, 403] {
            let mut ind = indicator();
            ind.apply(ProbeOutcome::status(code), LoadingPolicy::default(), now());
            assert_eq!(terminal_markers(&ind), vec![Classification::Unknown]);
            assert!(!ind.is_loading());
        }
    }

    #[test]
    fn should_attach_body_as_tooltip_on_unexpected_status() {
        let mut ind = indicator();
        ind.apply(
            ProbeOutcome::status_with_body(500, "db unreachable"),
            LoadingPolicy::default(),
            now(),
        );
        assert_eq!(terminal_markers(&ind), vec![Classification::Warning]);
        assert_eq!(ind.tooltip().map(Tooltip::text), Some("db unreachable"));
        assert!(!ind.is_loading());
    }

    #[test]
    fn should_attach_empty_tooltip_when_warning_body_missing() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::status(301), LoadingPolicy::default(), now());
        assert_eq!(ind.classification(), Classification::Warning);
        assert_eq!(ind.tooltip().map(Tooltip::text), Some(""));
    }

    #[test]
    fn should_clear_loading_on_transport_failure_by_default() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::TransportFailure, LoadingPolicy::ClearOnFailure, now());
        assert_eq!(terminal_markers(&ind), vec![Classification::Unknown]);
        assert!(!ind.is_loading());
    }

    #[test]
    fn should_keep_loading_on_transport_failure_when_policy_says_so() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::TransportFailure, LoadingPolicy::KeepOnFailure, now());
        assert_eq!(terminal_markers(&ind), vec![Classification::Unknown]);
        assert!(ind.is_loading());
        assert_eq!(ind.classification(), Classification::Unknown);
    }

    #[test]
    fn should_remove_loading_on_status_even_with_keep_policy() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::status(200), LoadingPolicy::KeepOnFailure, now());
        assert!(!ind.is_loading());
    }

    #[test]
    fn should_replace_previous_terminal_marker() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        ind.apply(ProbeOutcome::status(503), LoadingPolicy::default(), now());
        assert_eq!(terminal_markers(&ind), vec![Classification::Error]);
    }

    #[test]
    fn should_not_accumulate_markers_or_tooltips_when_repeated() {
        let mut ind = indicator();
        let outcome = ProbeOutcome::status_with_body(500, "db unreachable");
        let first = ind.apply(outcome.clone(), LoadingPolicy::default(), now());
        let after_first = ind.clone();
        let second = ind.apply(outcome, LoadingPolicy::default(), now());

        assert_eq!(first, second);
        assert_eq!(
            ind.classes().collect::<Vec<_>>(),
            after_first.classes().collect::<Vec<_>>()
        );
        assert_eq!(ind.tooltip(), after_first.tooltip());
    }

    #[test]
    fn should_drop_stale_tooltip_when_endpoint_recovers() {
        let mut ind = indicator();
        ind.apply(
            ProbeOutcome::status_with_body(500, "db unreachable"),
            LoadingPolicy::default(),
            now(),
        );
        ind.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        assert!(ind.tooltip().is_none());
    }

    #[test]
    fn should_expose_tooltip_marker_only_on_warning() {
        let mut ind = indicator();
        ind.apply(
            ProbeOutcome::status_with_body(500, "db unreachable"),
            LoadingPolicy::default(),
            now(),
        );
        assert_eq!(ind.markers(), vec!["warning-dot", TOOLTIP_MARKER]);

        ind.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        assert_eq!(ind.markers(), vec!["success-dot"]);
    }

    #[test]
    fn should_record_one_uptime_sample_per_outcome() {
        let mut ind = indicator();
        ind.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        ind.apply(ProbeOutcome::TransportFailure, LoadingPolicy::default(), now());

        assert_eq!(ind.uptime().samples(), 2);
        assert_eq!(ind.uptime().overall(), Some(50.0));

        ind.reset_uptime(now());
        assert_eq!(ind.uptime().samples(), 0);
        assert_eq!(ind.classification(), Classification::Unknown);
    }
}
