use clap::{Arg, Command, arg, value_parser};

pub const WINDOWS_CMD: &str = "windows";

pub fn create_windows_cli() -> Command {
    Command::new(WINDOWS_CMD)
        .about("Split origins into overlapping windows, written in the count table layout (origin columns, window columns).")
        .arg(Arg::new("origins").required(true).help("BED4 file with the origins"))
        .arg(
            arg!(--width <WIDTH> "Window width in bp (default: 50)")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            arg!(--step <STEP> "Distance between window starts in bp (default: 25)")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
        .arg(arg!(--config <CONFIG> "Resolver config (.toml)").required(false))
        .arg(arg!(--output <OUTPUT> "Output file, gzip'd when ending in .gz (default: stdout)").required(false))
}
