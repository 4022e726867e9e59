//! # Input/Output utilities for SNS-seq origin tables.
//!
//! Reads the merged origin/window/count table written by the upstream counting step and the
//! origin BED files, and writes the resolved summits (and the generated origin windows) back
//! to disk as BED-like text, optionally gzip'd.
//!
pub mod bed;
pub mod error;
pub mod origins;
pub mod report;
pub mod table;

// re-expose core functions
pub use bed::*;
pub use error::*;
pub use origins::*;
pub use report::*;
pub use table::*;
