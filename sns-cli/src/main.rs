mod summits;
mod windows;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "snstools";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for SNS-seq replication origin analysis: origin windows and summit resolution.")
        .subcommand_required(true)
        .subcommand(windows::cli::create_windows_cli())
        .subcommand(summits::cli::create_summits_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ORIGIN WINDOWS
        //
        Some((windows::cli::WINDOWS_CMD, matches)) => {
            windows::handlers::run_windows(matches)?;
        }

        //
        // SUMMITS
        //
        Some((summits::cli::SUMMITS_CMD, matches)) => {
            summits::handlers::run_summits(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
