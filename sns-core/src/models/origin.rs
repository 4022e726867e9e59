use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

///
/// Origin struct, one replication origin region as found in the origins BED file
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub name: String,
}

impl Origin {
    ///
    /// Create a new origin, checking that it spans at least one base and is named.
    ///
    pub fn new(chr: &str, start: u32, end: u32, name: &str) -> Result<Self, ModelError> {
        if name.is_empty() {
            return Err(ModelError::EmptyOriginName(format!("{}:{}-{}", chr, start, end)));
        }
        if start >= end {
            return Err(ModelError::InvalidCoordinates {
                name: name.to_string(),
                start,
                end,
            });
        }

        Ok(Origin {
            chr: chr.to_string(),
            start,
            end,
            name: name.to_string(),
        })
    }

    ///
    /// Get length of the origin
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True when both origins cover exactly the same coordinates.
    pub fn same_span(&self, other: &Origin) -> bool {
        self.chr == other.chr && self.start == other.start && self.end == other.end
    }

    /// `chr:start-end`, used in log and error messages.
    pub fn locus(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start, self.end)
    }

    ///
    /// Get the BED4 line of the origin
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chr, self.start, self.end, self.name)
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
