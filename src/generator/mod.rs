//! Directory traversal and `@font-face` rendering

pub mod declaration;
pub mod walk;

pub use declaration::{Generator, BLOCK_SEPARATOR};
pub use walk::FontDirectory;

use log::debug;

use crate::error::Result;
use crate::models::Config;

/// Scan `config.font_dir` and render the declarations for every font found
pub fn run(config: &Config) -> Result<String> {
    let generator = Generator::new(config)?;

    let fonts = FontDirectory::new(&config.font_dir, config);

    if !fonts.root().is_dir() {
        debug!("Font directory {} is not readable, nothing to do", fonts.root().display());
    }
    debug!("Writing url() paths relative to {}", generator.base_dir().display());

    Ok(generator.generate(fonts))
}
