//! # labdot-adapter-http-reqwest
//!
//! Outbound HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `Probe` port with a single plain GET per call
//! - Map reqwest failures (connect, timeout, body) onto `TransportError`
//! - Build the shared client from [`HttpProbeConfig`]
//!
//! ## Dependency rule
//! Depends on `labdot-app` (port traits) only. Never leaks reqwest types
//! past the port.

pub mod config;
pub mod error;
pub mod probe;

pub use config::HttpProbeConfig;
pub use error::HttpProbeError;
pub use probe::{ReqwestProbe, ReqwestResponse};
