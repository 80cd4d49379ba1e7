//! `fumble` binary: typo augmentation, corpus statistics and checkpoint
//! helpers.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use fumble::cli::args::FumbleArgs;
use fumble::cli::commands::execute_command;

/// Log level for a verbosity count; `-q` gives errors only.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = FumbleArgs::parse();

    // Augmented text may go to stdout, so log lines stay on stderr.
    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
