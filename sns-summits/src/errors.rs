use thiserror::Error;

/// Why the rows of one origin can't be resolved to a summit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputReason {
    #[error("window {window} has no sample counts")]
    NoSampleCounts { window: String },

    #[error("window {window} has a count that is negative or not a number: {value}")]
    InvalidCount { window: String, value: f64 },

    #[error("window {window} is {width} bp wide, too narrow for a summit at offset {offset}")]
    WindowTooNarrow {
        window: String,
        width: u32,
        offset: u32,
    },

    #[error("window {window} is not on the origin chromosome {origin_chr}")]
    ChromosomeMismatch { window: String, origin_chr: String },

    #[error("window {window} does not lie within the origin {origin}")]
    OutsideOrigin { window: String, origin: String },

    #[error("no windows found for the origin")]
    NoWindows,
}

///
/// Per-origin failures. Every variant carries the name of the offending origin so a run can
/// report all failing origins at once and still write the summits of the others.
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummitError {
    #[error("Invalid input for origin {origin}: {reason}")]
    InvalidInput {
        origin: String,
        reason: InvalidInputReason,
    },

    #[error("Origin {origin} appears with inconsistent coordinates: {first} and {conflicting}")]
    DuplicateOrigin {
        origin: String,
        first: String,
        conflicting: String,
    },
}

impl SummitError {
    pub fn origin(&self) -> &str {
        match self {
            SummitError::InvalidInput { origin, .. } => origin,
            SummitError::DuplicateOrigin { origin, .. } => origin,
        }
    }

    /// Short machine-readable label, used as a column in failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SummitError::InvalidInput { .. } => "invalid_input",
            SummitError::DuplicateOrigin { .. } => "duplicate_origin",
        }
    }

    /// The failure message without the origin prefix.
    pub fn reason(&self) -> String {
        match self {
            SummitError::InvalidInput { reason, .. } => reason.to_string(),
            SummitError::DuplicateOrigin {
                first, conflicting, ..
            } => format!("inconsistent coordinates: {} and {}", first, conflicting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_invalid_input_message() {
        let err = SummitError::InvalidInput {
            origin: "HO3".to_string(),
            reason: InvalidInputReason::NoSampleCounts {
                window: "chr1:0-50".to_string(),
            },
        };
        assert_eq!(err.origin(), "HO3");
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(
            err.to_string(),
            "Invalid input for origin HO3: window chr1:0-50 has no sample counts"
        );
        assert_eq!(err.reason(), "window chr1:0-50 has no sample counts");
    }

    #[rstest]
    fn test_duplicate_origin_message() {
        let err = SummitError::DuplicateOrigin {
            origin: "HO9".to_string(),
            first: "chr1:0-100".to_string(),
            conflicting: "chr1:0-150".to_string(),
        };
        assert_eq!(err.kind(), "duplicate_origin");
        assert_eq!(
            err.reason(),
            "inconsistent coordinates: chr1:0-100 and chr1:0-150"
        );
    }
}
