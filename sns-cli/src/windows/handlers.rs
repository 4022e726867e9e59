use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use sns_io::{BedWrite, read_origins_from_path};
use sns_summits::{ResolverConfig, make_windows};

pub fn run_windows(matches: &ArgMatches) -> Result<()> {
    let origins_path = matches
        .get_one::<String>("origins")
        .context("A path to the origins BED file is required.")?;
    let output = matches.get_one::<String>("output").map(Path::new);

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ResolverConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load resolver config: {}", path))?,
        None => ResolverConfig::default(),
    };
    // flags win over the config file
    if let Some(width) = matches.get_one::<u32>("width") {
        config.window_width = Some(*width);
    }
    if let Some(step) = matches.get_one::<u32>("step") {
        config.window_step = Some(*step);
    }
    let params = config.window_params()?;

    let origins = read_origins_from_path(origins_path)
        .with_context(|| format!("Failed to load origins: {}", origins_path))?;

    let windows = make_windows(&origins, &params);
    windows
        .as_slice()
        .write_bed_to(output)
        .context("Failed to write origin windows")?;

    Ok(())
}
