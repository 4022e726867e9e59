use std::fmt::{self, Display};

use crate::models::Origin;

///
/// One row of the merged count table: a fixed-width sub-window of an origin, together with
/// the read counts of every sample that fall into it.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WindowCount {
    pub origin: Origin,
    pub window_chr: String,
    pub window_start: u32,
    pub window_end: u32,

    /// one value per sample, in table column order
    pub sample_counts: Vec<f64>,
}

impl WindowCount {
    pub fn origin_name(&self) -> &str {
        &self.origin.name
    }

    pub fn width(&self) -> u32 {
        self.window_end.saturating_sub(self.window_start)
    }

    ///
    /// Arithmetic mean of the sample counts. `None` when the window carries no samples,
    /// so an empty row can never turn into a NaN mean.
    ///
    pub fn mean_count(&self) -> Option<f64> {
        if self.sample_counts.is_empty() {
            return None;
        }
        let total: f64 = self.sample_counts.iter().sum();
        Some(total / self.sample_counts.len() as f64)
    }

    /// True when the window lies entirely inside its origin.
    pub fn within_origin(&self) -> bool {
        self.window_chr == self.origin.chr
            && self.window_start >= self.origin.start
            && self.window_end <= self.origin.end
    }

    /// `chr:start-end` of the window.
    pub fn locus(&self) -> String {
        format!("{}:{}-{}", self.window_chr, self.window_start, self.window_end)
    }
}

///
/// A sub-window generated over an origin, before any reads are counted in it. Written out in
/// the merged-table column layout (origin columns, then window columns) so the counting step
/// only has to append sample columns.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginWindow {
    pub origin: Origin,
    pub start: u32,
    pub end: u32,
}

impl OriginWindow {
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.origin.as_string(),
            self.origin.chr,
            self.start,
            self.end
        )
    }
}

impl Display for OriginWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn origin() -> Origin {
        Origin::new("chr1", 1000, 1100, "HO1").unwrap()
    }

    fn window(origin: &Origin, start: u32, counts: Vec<f64>) -> WindowCount {
        WindowCount {
            origin: origin.clone(),
            window_chr: origin.chr.clone(),
            window_start: start,
            window_end: start + 50,
            sample_counts: counts,
        }
    }

    #[rstest]
    fn test_mean_count_is_exact(origin: Origin) {
        let w = window(&origin, 1000, vec![10.0, 20.0, 30.0]);
        assert_eq!(w.mean_count(), Some(20.0));
    }

    #[rstest]
    fn test_mean_count_keeps_fractions(origin: Origin) {
        let w = window(&origin, 1000, vec![1.0, 2.0]);
        assert_eq!(w.mean_count(), Some(1.5));
    }

    #[rstest]
    fn test_mean_count_empty_samples(origin: Origin) {
        let w = window(&origin, 1000, vec![]);
        assert_eq!(w.mean_count(), None);
    }

    #[rstest]
    #[case(1000, true)]
    #[case(1050, true)]
    #[case(1075, false)]
    #[case(1100, false)]
    #[case(950, false)]
    fn test_within_origin(origin: Origin, #[case] start: u32, #[case] expected: bool) {
        assert_eq!(window(&origin, start, vec![1.0]).within_origin(), expected);
    }

    #[rstest]
    fn test_within_origin_other_chromosome(origin: Origin) {
        let mut other_chr = window(&origin, 1000, vec![1.0]);
        other_chr.window_chr = "chr2".to_string();
        assert!(!other_chr.within_origin());
    }

    #[rstest]
    fn test_origin_window_line(origin: Origin) {
        let w = OriginWindow {
            origin,
            start: 1025,
            end: 1075,
        };
        assert_eq!(w.as_string(), "chr1\t1000\t1100\tHO1\tchr1\t1025\t1075");
    }
}
