use log::{info, warn};

use sns_core::models::{Origin, OriginWindow};

use crate::config::WindowParams;

///
/// Lay sliding windows over every origin.
///
/// Windows start at the origin start and advance by `params.step` while they still start
/// inside the origin. The last windows are truncated at the origin end, so an origin at
/// `0-100` with width 50 and step 25 gives `0-50`, `25-75`, `50-100` and `75-100`.
///
/// # Arguments
/// - origins: the origins to split
/// - params: window width and step
pub fn make_windows(origins: &[Origin], params: &WindowParams) -> Vec<OriginWindow> {
    let mut windows: Vec<OriginWindow> = Vec::new();

    for origin in origins {
        if origin.start >= origin.end {
            warn!("Skipping empty origin {} at {}", origin.name, origin.locus());
            continue;
        }

        let mut start = origin.start;
        while start < origin.end {
            let end = start.saturating_add(params.width).min(origin.end);
            windows.push(OriginWindow {
                origin: origin.clone(),
                start,
                end,
            });
            start = match start.checked_add(params.step) {
                Some(next) => next,
                None => break,
            };
        }
    }

    info!(
        "Generated {} windows over {} origins (width {}, step {})",
        windows.len(),
        origins.len(),
        params.width,
        params.step
    );

    windows
}
