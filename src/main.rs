use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::report::Number;

mod report;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHA: &str = env!("GIT_SHA");

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, help = "Directory to write log files to.")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the given quantities and all quantities derived from them.
    Describe {
        #[arg(long, allow_hyphen_values = true, help = "Length in metres.")]
        length: Option<Number>,
        #[arg(long, allow_hyphen_values = true, help = "Energy in electron-volts.")]
        energy: Option<Number>,
        #[arg(long, allow_hyphen_values = true, help = "Time in seconds.")]
        time: Option<Number>,
    },
    /// Print energy and frequency of a photon.
    Photon {
        #[arg(long, help = "Wavelength in metres.")]
        wavelength: Number,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = dimq_log::init(args.log_dir.as_deref())?;

    info!(
        "Starting dimq {{ \"Version\": \"{}\", \"GitSha\": \"{}\" }}",
        CARGO_PKG_VERSION, GIT_SHA
    );

    let mut out = io::stdout().lock();
    match args.command {
        Command::Describe {
            length,
            energy,
            time,
        } => report::describe(&mut out, length, energy, time),
        Command::Photon { wavelength } => report::photon(&mut out, wavelength),
    }
}
