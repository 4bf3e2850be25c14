//! Usage snapshot persistence for Claude usage monitors
//!
//! Derives a canonical usage snapshot from in-memory metrics and publishes it
//! to `<report_dir>/current.json` so status bars and dashboards can poll the
//! current state without coupling to the monitor's internals. The pipeline is
//! one-way and stateless per call: [`build_snapshot`] normalizes the metrics,
//! [`StateReporter::publish`] writes the result atomically and suppresses
//! every failure so the host refresh loop is never disturbed.

pub mod config;
pub mod models;
pub mod normalize;
pub mod publish;

pub use config::*;
pub use models::*;
pub use normalize::*;
pub use publish::*;
