//! Clock access for the domain.
//!
//! Indicators record when they were last checked and uptime samples are
//! bucketed by their timestamp, so everything shares one UTC clock.

use chrono::{DateTime, Utc};

/// Instant at which a probe outcome was observed.
pub type Timestamp = DateTime<Utc>;

/// Read the wall clock.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_utc_wall_clock() {
        let first = now();
        let second = now();
        assert!(second >= first);
        assert_eq!(first.timezone(), Utc);
    }
}
