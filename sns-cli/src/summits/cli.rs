use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SUMMITS_CMD: &str = "summits";

pub fn create_summits_cli() -> Command {
    Command::new(SUMMITS_CMD)
        .about("Resolve one summit per origin from a merged origin/window/count table. Outputs BED4 (chr, start, end, name).")
        .arg(
            Arg::new("table")
                .required(true)
                .help("Merged count table: origin chr/start/end/name, window chr/start/end, one column per sample (.gz or - for stdin)"),
        )
        .arg(arg!(--output <OUTPUT> "Output BED file, gzip'd when ending in .gz (default: stdout)").required(false))
        .arg(
            Arg::new("origins")
                .long("origins")
                .required(false)
                .help("BED4 file with every origin; origins without windows are reported"),
        )
        .arg(
            Arg::new("summit-offset")
                .long("summit-offset")
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Fixed distance from window start to summit start (default: width / 2 - 1)"),
        )
        .arg(arg!(--config <CONFIG> "Resolver config (.toml)").required(false))
        .arg(arg!(--failures <FAILURES> "Write failed origins and reasons to this TSV file").required(false))
        .arg(
            arg!(--score "Add the winning mean count as BED score column")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--strict "Exit with an error when any origin fails to resolve")
                .action(ArgAction::SetTrue),
        )
}
