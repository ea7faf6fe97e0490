use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::font::extract_face_metadata;
use crate::models::{Config, FontFace};
use crate::utils::{relative_path, to_url_path};

/// Separator placed between consecutive declaration blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Turns font file paths into `@font-face` declarations
pub struct Generator<'a> {
    config: &'a Config,
    base_dir: PathBuf,
}

impl<'a> Generator<'a> {
    /// Create a generator whose `url()` paths are relative to the working directory
    pub fn new(config: &'a Config) -> Result<Self> {
        let base_dir = env::current_dir()?;
        Ok(Self::with_base_dir(config, base_dir))
    }

    /// Create a generator whose `url()` paths are relative to `base_dir`
    pub fn with_base_dir(config: &'a Config, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Directory the `url()` paths are relative to
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Build the record for one file, or `None` if it should be skipped
    pub fn font_face(&self, path: &Path) -> Option<FontFace> {
        let (format, weight, style) = extract_face_metadata(path, self.config)?;

        let relative = match relative_path(path, &self.base_dir) {
            Some(relative) => relative,
            None => {
                debug!(
                    "Cannot express {} relative to {}, skipping",
                    path.display(),
                    self.base_dir.display()
                );
                return None;
            }
        };

        Some(FontFace {
            url_path: to_url_path(&relative),
            format,
            weight,
            style,
        })
    }

    /// Render the declaration block for one file, or `None` if it should be skipped
    pub fn generate_font_face(&self, path: &Path) -> Option<String> {
        self.font_face(path)
            .map(|face| face.to_css(&self.config.family_name))
    }

    /// Render every recognized path, in iteration order, joined by a blank line
    pub fn generate<I>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let blocks: Vec<String> = paths
            .into_iter()
            .filter_map(|path| self.generate_font_face(&path))
            .collect();

        debug!("Generated {} @font-face declarations", blocks.len());

        blocks.join(BLOCK_SEPARATOR)
    }
}
