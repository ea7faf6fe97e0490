use std::path::PathBuf;

use clap::Parser;

use crate::models::{Config, DEFAULT_FAMILY_NAME, DEFAULT_FONT_DIR};

/// Generate @font-face declarations for every font file under a directory
#[derive(Debug, Parser)]
#[command(name = "fontface", version, about)]
pub struct Args {
    /// Directory to scan for .woff2, .woff and .ttf files
    #[arg(short, long, default_value = DEFAULT_FONT_DIR)]
    pub root: PathBuf,

    /// Font family name written into every declaration
    #[arg(short, long, default_value = DEFAULT_FAMILY_NAME)]
    pub family: String,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the generation config from the parsed arguments
    pub fn into_config(self) -> Config {
        Config {
            debug_mode: self.debug,
            ..Config::new(self.root, self.family)
        }
    }
}
