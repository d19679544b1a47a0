//! # labdot-domain
//!
//! Pure domain model for the labdot status dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Classifications** (the markers an indicator can carry)
//! - Define **Probe outcomes** (what a single HTTP GET produced)
//! - Define **Indicators** (the dot shown per monitored endpoint) and the
//!   transition from probe outcome to classification
//! - Define the **Tooltip** payload carried by warning indicators
//! - Define **Uptime statistics** (weekday × hour sample matrix)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod classification;
pub mod indicator;
pub mod probe;
pub mod uptime;
