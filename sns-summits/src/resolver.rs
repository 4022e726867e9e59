use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use sns_core::models::{Origin, OriginSummit, WindowCount};

use crate::config::ResolverConfig;
use crate::errors::{InvalidInputReason, SummitError};

/// Outcome of a resolver run over a whole count table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummitReport {
    /// one summit per resolved origin, sorted by origin name
    pub summits: Vec<OriginSummit>,
    /// one entry per failed origin, sorted by origin name
    pub failures: Vec<SummitError>,
    /// resolved origins where several windows shared the maximum mean
    pub tied_origins: usize,
}

impl SummitReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_origins(&self) -> usize {
        self.summits.len() + self.failures.len()
    }
}

///
/// Reduces per-window read counts to one summit per origin.
///
/// For every origin the window with the largest mean count across samples wins. Equal means
/// are broken towards the smallest window start (then the smallest window end), so the result
/// never depends on row order. The summit is the two base interval starting at
/// `window_start + offset`, where the offset is fixed by configuration or derived from the
/// winning window as `width / 2 - 1` (24 for the usual 50 bp windows).
///
#[derive(Debug, Clone, Default)]
pub struct SummitResolver {
    summit_offset: Option<u32>,
    expected_origins: Option<Vec<Origin>>,
}

#[derive(Debug, PartialEq)]
struct Resolved {
    summit: OriginSummit,
    tied: bool,
}

impl SummitResolver {
    pub fn new() -> Self {
        SummitResolver::default()
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        SummitResolver {
            summit_offset: config.summit_offset,
            expected_origins: None,
        }
    }

    /// Use a fixed summit offset instead of deriving it from each window's width.
    pub fn with_summit_offset(mut self, offset: u32) -> Self {
        self.summit_offset = Some(offset);
        self
    }

    ///
    /// Register the full origin set the windows were generated from. Origins of this set that
    /// have no rows in the count table are then reported instead of silently missing.
    ///
    pub fn with_expected_origins(mut self, origins: Vec<Origin>) -> Self {
        self.expected_origins = Some(origins);
        self
    }

    ///
    /// Resolve every origin of the table, collecting failures instead of stopping at the
    /// first one.
    ///
    pub fn resolve(&self, windows: &[WindowCount]) -> SummitReport {
        let mut groups = group_by_origin(windows);
        debug!(
            "Resolving {} windows over {} origins",
            windows.len(),
            groups.len()
        );

        let mut failures: Vec<SummitError> = Vec::new();
        if let Some(expected) = &self.expected_origins {
            failures.extend(check_expected_origins(expected, &groups));
        }
        // an origin that already failed against the origin set is not resolved again
        for err in &failures {
            groups.remove(err.origin());
        }

        let outcomes = self.resolve_groups(&groups);

        let mut summits: Vec<OriginSummit> = Vec::with_capacity(outcomes.len());
        let mut tied_origins = 0;
        for outcome in outcomes {
            match outcome {
                Ok(resolved) => {
                    if resolved.tied {
                        tied_origins += 1;
                    }
                    summits.push(resolved.summit);
                }
                Err(err) => failures.push(err),
            }
        }

        // parallel reduction may finish groups in any order
        summits.sort_by(|a, b| a.origin_name.cmp(&b.origin_name));
        failures.sort_by(|a, b| {
            a.origin()
                .cmp(b.origin())
                .then_with(|| a.to_string().cmp(&b.to_string()))
        });
        failures.dedup_by(|a, b| a.origin() == b.origin());

        info!(
            "Resolved {} summits ({} origins with tied windows, {} failed)",
            summits.len(),
            tied_origins,
            failures.len()
        );

        SummitReport {
            summits,
            failures,
            tied_origins,
        }
    }

    #[cfg(feature = "parallel")]
    fn resolve_groups(
        &self,
        groups: &BTreeMap<&str, Vec<&WindowCount>>,
    ) -> Vec<Result<Resolved, SummitError>> {
        resolve_groups_par(groups, self.summit_offset)
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve_groups(
        &self,
        groups: &BTreeMap<&str, Vec<&WindowCount>>,
    ) -> Vec<Result<Resolved, SummitError>> {
        resolve_groups_seq(groups, self.summit_offset)
    }
}

///
/// Resolve a table strictly: the first failure (in origin name order) aborts the run.
///
pub fn resolve(windows: &[WindowCount]) -> Result<Vec<OriginSummit>, SummitError> {
    let report = SummitResolver::new().resolve(windows);
    match report.failures.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(report.summits),
    }
}

#[cfg(feature = "parallel")]
fn resolve_groups_par(
    groups: &BTreeMap<&str, Vec<&WindowCount>>,
    summit_offset: Option<u32>,
) -> Vec<Result<Resolved, SummitError>> {
    groups
        .par_iter()
        .map(|(name, windows)| resolve_origin(name, windows, summit_offset))
        .collect()
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn resolve_groups_seq(
    groups: &BTreeMap<&str, Vec<&WindowCount>>,
    summit_offset: Option<u32>,
) -> Vec<Result<Resolved, SummitError>> {
    groups
        .iter()
        .map(|(name, windows)| resolve_origin(name, windows, summit_offset))
        .collect()
}

fn group_by_origin(windows: &[WindowCount]) -> BTreeMap<&str, Vec<&WindowCount>> {
    let mut groups: BTreeMap<&str, Vec<&WindowCount>> = BTreeMap::new();
    for window in windows {
        groups.entry(window.origin_name()).or_default().push(window);
    }
    groups
}

fn check_expected_origins(
    expected: &[Origin],
    groups: &BTreeMap<&str, Vec<&WindowCount>>,
) -> Vec<SummitError> {
    let mut failures = Vec::new();
    let mut seen: BTreeMap<&str, &Origin> = BTreeMap::new();

    for origin in expected {
        match seen.get(origin.name.as_str()) {
            Some(first) if !first.same_span(origin) => {
                failures.push(SummitError::DuplicateOrigin {
                    origin: origin.name.clone(),
                    first: first.locus(),
                    conflicting: origin.locus(),
                });
                continue;
            }
            Some(_) => continue,
            None => {
                seen.insert(origin.name.as_str(), origin);
            }
        }

        if !groups.contains_key(origin.name.as_str()) {
            failures.push(SummitError::InvalidInput {
                origin: origin.name.clone(),
                reason: InvalidInputReason::NoWindows,
            });
        }
    }

    for (name, windows) in groups {
        match seen.get(name) {
            None => warn!("Origin {} has windows but is not in the origin set", name),
            Some(origin) => {
                if let Some(window) = windows.iter().find(|w| !w.origin.same_span(origin)) {
                    failures.push(SummitError::DuplicateOrigin {
                        origin: name.to_string(),
                        first: origin.locus(),
                        conflicting: window.origin.locus(),
                    });
                }
            }
        }
    }

    failures
}

/// Total order over rows of one origin: coordinates, then sample counts.
fn cmp_window_rows(a: &WindowCount, b: &WindowCount) -> Ordering {
    (&a.window_chr, a.window_start, a.window_end)
        .cmp(&(&b.window_chr, b.window_start, b.window_end))
        .then_with(|| {
            a.sample_counts
                .iter()
                .zip(&b.sample_counts)
                .map(|(x, y)| x.total_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.sample_counts.len().cmp(&b.sample_counts.len()))
        })
}

/// Order windows so that the best one compares as `Less`.
fn rank_windows(a: (&WindowCount, f64), b: (&WindowCount, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| a.0.window_start.cmp(&b.0.window_start))
        .then_with(|| a.0.window_end.cmp(&b.0.window_end))
}

fn resolve_origin(
    name: &str,
    windows: &[&WindowCount],
    summit_offset: Option<u32>,
) -> Result<Resolved, SummitError> {
    let invalid = |reason: InvalidInputReason| SummitError::InvalidInput {
        origin: name.to_string(),
        reason,
    };

    // smallest span first, so the reported pair doesn't depend on row order
    let origin = windows
        .iter()
        .map(|w| &w.origin)
        .min_by(|a, b| (&a.chr, a.start, a.end).cmp(&(&b.chr, b.start, b.end)))
        .ok_or_else(|| invalid(InvalidInputReason::NoWindows))?;

    if let Some(conflict) = windows
        .iter()
        .map(|w| &w.origin)
        .filter(|o| !o.same_span(origin))
        .min_by(|a, b| (&a.chr, a.start, a.end).cmp(&(&b.chr, b.start, b.end)))
    {
        return Err(SummitError::DuplicateOrigin {
            origin: name.to_string(),
            first: origin.locus(),
            conflicting: conflict.locus(),
        });
    }

    // validate in coordinate order so the reported window doesn't depend on row order
    let mut ordered: Vec<&WindowCount> = windows.to_vec();
    ordered.sort_by(|a, b| cmp_window_rows(a, b));

    let mut scored: Vec<(&WindowCount, f64)> = Vec::with_capacity(ordered.len());
    for window in ordered {
        if window.window_chr != origin.chr {
            return Err(invalid(InvalidInputReason::ChromosomeMismatch {
                window: window.locus(),
                origin_chr: origin.chr.clone(),
            }));
        }
        if !window.within_origin() {
            return Err(invalid(InvalidInputReason::OutsideOrigin {
                window: window.locus(),
                origin: origin.locus(),
            }));
        }
        if let Some(value) = window
            .sample_counts
            .iter()
            .find(|c| !c.is_finite() || **c < 0.0)
        {
            return Err(invalid(InvalidInputReason::InvalidCount {
                window: window.locus(),
                value: *value,
            }));
        }
        let mean = window.mean_count().ok_or_else(|| {
            invalid(InvalidInputReason::NoSampleCounts {
                window: window.locus(),
            })
        })?;
        // -0.0 would rank below 0.0 under total_cmp
        scored.push((window, mean + 0.0));
    }

    let (best, best_mean) = scored
        .iter()
        .copied()
        .min_by(|a, b| rank_windows(*a, *b))
        .ok_or_else(|| invalid(InvalidInputReason::NoWindows))?;

    let tied = scored.iter().filter(|(_, mean)| *mean == best_mean).count() > 1;
    if tied {
        debug!(
            "Origin {} has tied windows at mean {}, using {}",
            name,
            best_mean,
            best.locus()
        );
    }

    let width = best.width();
    let offset = match summit_offset {
        Some(offset) => offset,
        None => (width / 2).saturating_sub(1),
    };
    if width < 2 || offset >= width {
        return Err(invalid(InvalidInputReason::WindowTooNarrow {
            window: best.locus(),
            width,
            offset,
        }));
    }

    let summit_start = best.window_start + offset;
    Ok(Resolved {
        summit: OriginSummit {
            chr: origin.chr.clone(),
            summit_start,
            summit_end: summit_start + 1,
            origin_name: name.to_string(),
            mean_count: best_mean,
        },
        tied,
    })
}
