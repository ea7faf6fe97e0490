use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::debug;

use fontface::cli::Args;
use fontface::error::Result;
use fontface::models::Config;
use fontface::utils::init_logging;

fn main() {
    let config = Args::parse().into_config();
    init_logging(config.debug_mode);

    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    debug!(
        "Scanning {} for family '{}'",
        config.font_dir.display(),
        config.family_name
    );

    let output = fontface::run(config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if !output.is_empty() {
        writeln!(handle, "{}", output)?;
    }
    handle.flush()?;

    Ok(())
}
