//! # labdot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Probe` — perform one HTTP GET against an endpoint
//!   - `ProbeResponse` — expose the status code and, on demand, the body text
//! - Define **driving/inbound** use-cases:
//!   - `StatusUpdater` — probe an endpoint and update its indicator
//!   - `RefreshScheduler` — re-check every indicator on a fixed interval
//! - Provide **in-process infrastructure** (the indicator board) that doesn't
//!   need IO
//!
//! ## Dependency rule
//! Depends on `labdot-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod board;
pub mod ports;
pub mod scheduler;
pub mod services;
