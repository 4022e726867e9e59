//! # Core models for SNS-seq origin analysis.
//!
//! This crate holds the plain data types shared by the rest of the workspace: replication
//! origins, the per-window read counts produced by the upstream counting step, and the
//! resolved origin summits that feed differential-usage tooling. It also carries the small
//! file helpers used to read plain or gzip'd tables.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
