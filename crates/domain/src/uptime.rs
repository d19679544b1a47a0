//! Uptime statistics — how often an indicator was online, per weekday and
//! hour of day.
//!
//! Every applied outcome is one sample. A sample counts as online only when
//! the indicator ended in [`Success`](Classification::Success). Buckets use
//! the UTC weekday (Monday first) and hour of the sample timestamp.

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::classification::Classification;
use crate::time::Timestamp;

/// Number of weekday rows, Monday first.
pub const DAYS: usize = 7;
/// Number of hour columns.
pub const HOURS: usize = 24;

/// Sample counts for one weekday/hour bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UptimeCell {
    /// Samples where the indicator was online.
    pub online: u32,
    /// All samples in the bucket.
    pub total: u32,
}

impl UptimeCell {
    /// Share of online samples in percent, or `None` with no samples.
    #[must_use]
    pub fn percentage(self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.online) * 100.0 / f64::from(self.total))
    }

    fn record(&mut self, online: bool) {
        self.total = self.total.saturating_add(1);
        if online {
            self.online = self.online.saturating_add(1);
        }
    }
}

/// Weekday × hour matrix of uptime samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UptimeMatrix {
    cells: [[UptimeCell; HOURS]; DAYS],
    since: Option<Timestamp>,
}

impl Default for UptimeMatrix {
    fn default() -> Self {
        Self {
            cells: [[UptimeCell::default(); HOURS]; DAYS],
            since: None,
        }
    }
}

impl UptimeMatrix {
    /// An empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome taken at `at`.
    pub fn record(&mut self, classification: Classification, at: Timestamp) {
        let day = at.weekday().num_days_from_monday() as usize;
        let hour = at.hour() as usize;
        self.cells[day][hour].record(classification == Classification::Success);
        self.since.get_or_insert(at);
    }

    /// Drop every sample. Counting restarts from `at`.
    pub fn reset(&mut self, at: Timestamp) {
        *self = Self {
            since: Some(at),
            ..Self::default()
        };
    }

    /// Bucket for a weekday (0 = Monday) and hour, if both are in range.
    #[must_use]
    pub fn cell(&self, day: usize, hour: usize) -> Option<UptimeCell> {
        self.cells.get(day)?.get(hour).copied()
    }

    /// All rows, Monday first.
    #[must_use]
    pub fn rows(&self) -> &[[UptimeCell; HOURS]; DAYS] {
        &self.cells
    }

    /// First sample, or the last reset.
    #[must_use]
    pub fn since(&self) -> Option<Timestamp> {
        self.since
    }

    /// Total number of samples.
    #[must_use]
    pub fn samples(&self) -> u32 {
        self.cells.iter().flatten().map(|cell| cell.total).sum()
    }

    /// Overall share of online samples in percent, or `None` with no samples.
    #[must_use]
    pub fn overall(&self) -> Option<f64> {
        let total = self.cells.iter().flatten().fold(UptimeCell::default(), |acc, cell| {
            UptimeCell {
                online: acc.online.saturating_add(cell.online),
                total: acc.total.saturating_add(cell.total),
            }
        });
        total.percentage()
    }
}
