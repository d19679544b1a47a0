//! # labdot-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the server-rendered **dashboard** at `/` (askama templates, tooltip
//!   text auto-escaped)
//! - Serve a small **JSON API** over the indicator board
//!   (`/api/indicators`, `/api/indicators/{id}`, `/api/indicators/{id}/check`,
//!   `/api/indicators/{id}/uptime`)
//! - Serve `/health` for liveness probes
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `labdot-app` (for port traits and services) and `labdot-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
