//! Application services (use-cases).

pub mod status_updater;
