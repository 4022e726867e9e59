use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// The resolved summit of one origin: a two base interval inside the window with the highest
/// mean read count.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OriginSummit {
    pub chr: String,
    pub summit_start: u32,
    pub summit_end: u32,
    pub origin_name: String,

    /// mean count of the winning window
    pub mean_count: f64,
}

impl OriginSummit {
    ///
    /// BED4 line: chr, start, end, name
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.chr, self.summit_start, self.summit_end, self.origin_name
        )
    }

    ///
    /// BED5 line, using the winning mean count as score
    ///
    pub fn as_string_with_score(&self) -> String {
        format!("{}\t{}", self.as_string(), self.mean_count)
    }
}

impl Display for OriginSummit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
