use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use sns_io::{
    BedWrite, ScoredSummits, read_count_records_from_path, read_count_table_from_path,
    read_origins_from_path, write_failure_report_to_path,
};
use sns_summits::{ResolverConfig, SummitResolver};

pub fn run_summits(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let table = matches
        .get_one::<String>("table")
        .context("A path to the merged count table is required.")?;
    let output = matches.get_one::<String>("output").map(Path::new);
    let failures_path = matches.get_one::<String>("failures");
    let with_score = matches.get_flag("score");
    let strict = matches.get_flag("strict");

    let config = match matches.get_one::<String>("config") {
        Some(path) => ResolverConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load resolver config: {}", path))?,
        None => ResolverConfig::default(),
    };

    let mut resolver = SummitResolver::from_config(&config);
    if let Some(offset) = matches.get_one::<u32>("summit-offset") {
        resolver = resolver.with_summit_offset(*offset);
    }
    let origins_path = matches.get_one::<String>("origins");
    if let Some(origins_path) = origins_path {
        let origins = read_origins_from_path(origins_path)
            .with_context(|| format!("Failed to load origins: {}", origins_path))?;
        resolver = resolver.with_expected_origins(origins);
    }

    // with an origin set, an empty table still reports every origin as missing
    let windows = match origins_path {
        Some(_) => read_count_records_from_path(table),
        None => read_count_table_from_path(table),
    }
    .with_context(|| format!("Failed to load count table: {}", table))?;

    let report = resolver.resolve(&windows);
    for failure in &report.failures {
        warn!("{}", failure);
    }

    let written = match with_score {
        true => ScoredSummits(&report.summits).write_bed_to(output),
        false => report.summits.as_slice().write_bed_to(output),
    };
    written.context("Failed to write summits")?;

    if let Some(path) = failures_path {
        write_failure_report_to_path(&report.failures, path)
            .with_context(|| format!("Failed to write failure report: {}", path))?;
        info!("Failure report written to {}", path);
    }

    info!(
        "{} of {} origins resolved",
        report.summits.len(),
        report.total_origins()
    );

    if strict && !report.is_complete() {
        anyhow::bail!(
            "{} origins failed to resolve, see the log for details",
            report.failures.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    use crate::build_parser;
    use crate::summits::cli::SUMMITS_CMD;

    fn get_test_path(file_name: &str) -> String {
        let path: PathBuf = std::env::current_dir()
            .unwrap()
            .join("../tests/data/summits")
            .join(file_name);
        path.to_str().unwrap().to_string()
    }

    fn run(args: &[&str]) -> Result<()> {
        let mut argv = vec!["snstools", SUMMITS_CMD];
        argv.extend_from_slice(args);
        let matches = build_parser().try_get_matches_from(argv).unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        run_summits(matches)
    }

    #[rstest]
    fn test_run_summits() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed");
        let table = get_test_path("merged_counts.tsv");

        run(&[table.as_str(), "--output", output.to_str().unwrap()]).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "chr1\t49\t50\tHO1\nchr2\t1024\t1025\tHO2\nchr2\t2024\t2025\tHO3\n"
        );
    }

    #[rstest]
    fn test_run_summits_reports_missing_origin() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed.gz");
        let failures = tempdir.path().join("failures.tsv");
        let table = get_test_path("merged_counts.tsv.gz");
        let origins = get_test_path("origins.bed");

        run(&[
            table.as_str(),
            "--origins",
            origins.as_str(),
            "--output",
            output.to_str().unwrap(),
            "--failures",
            failures.to_str().unwrap(),
        ])
        .unwrap();

        let report = std::fs::read_to_string(&failures).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "HO4\tinvalid_input\tno windows found for the origin");
        assert!(output.exists());
    }

    #[rstest]
    fn test_run_summits_strict_fails_after_writing() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed");
        let table = get_test_path("merged_counts.tsv");
        let origins = get_test_path("origins.bed");

        let result = run(&[
            table.as_str(),
            "--origins",
            origins.as_str(),
            "--output",
            output.to_str().unwrap(),
            "--strict",
        ]);

        assert!(result.is_err());
        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[rstest]
    fn test_run_summits_with_offset_and_score() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed");
        let table = get_test_path("merged_counts.tsv");

        run(&[
            table.as_str(),
            "--summit-offset",
            "0",
            "--score",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let first = content.lines().next().unwrap();
        assert_eq!(first, "chr1\t25\t26\tHO1\t9");
    }

    #[rstest]
    fn test_run_summits_with_config() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed");
        let table = get_test_path("merged_counts.tsv");
        let config = get_test_path("resolver.toml");

        run(&[
            table.as_str(),
            "--config",
            config.as_str(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("chr1\t49\t50\tHO1\n"));
    }

    #[rstest]
    fn test_run_summits_header_only_table_with_origins() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("summits.bed");
        let failures = tempdir.path().join("failures.tsv");
        let table = get_test_path("header_only.tsv");
        let origins = get_test_path("origins.bed");

        run(&[
            table.as_str(),
            "--origins",
            origins.as_str(),
            "--output",
            output.to_str().unwrap(),
            "--failures",
            failures.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
        let report = std::fs::read_to_string(&failures).unwrap();
        assert_eq!(
            report.lines().skip(1).collect::<Vec<&str>>(),
            vec![
                "HO1\tinvalid_input\tno windows found for the origin",
                "HO2\tinvalid_input\tno windows found for the origin",
                "HO3\tinvalid_input\tno windows found for the origin",
                "HO4\tinvalid_input\tno windows found for the origin",
            ]
        );
    }

    #[rstest]
    fn test_run_summits_header_only_table_without_origins() {
        let table = get_test_path("header_only.tsv");
        assert!(run(&[table.as_str()]).is_err());
    }

    #[rstest]
    fn test_run_summits_missing_table() {
        let result = run(&["does/not/exist.tsv"]);
        assert!(result.is_err());
    }
}
