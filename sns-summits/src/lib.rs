//! # Origin summit resolution
//!
//! Every replication origin is cut into overlapping fixed-width windows and reads of each
//! sample are counted per window upstream. This crate reduces those counts to one summit per
//! origin: the window with the highest mean count across samples wins (leftmost window on
//! ties) and its midpoint becomes a two base summit interval.
//!
//! It also generates the origin windows themselves, so the counting step only has to append
//! one column per sample.
//!
//! # Example
//!
//! ```no_run
//! use sns_summits::SummitResolver;
//! # let windows: Vec<sns_core::models::WindowCount> = vec![];
//!
//! let report = SummitResolver::new().resolve(&windows);
//! for failure in &report.failures {
//!     eprintln!("{}", failure);
//! }
//! ```
pub mod config;
pub mod consts;
pub mod errors;
pub mod resolver;
pub mod windows;

// re-exports
pub use config::*;
pub use errors::*;
pub use resolver::*;
pub use windows::*;
