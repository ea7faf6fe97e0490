use std::path::PathBuf;

use super::font::FontFormat;
use crate::error::{Error, Result};

/// Directory scanned when no root is given
pub const DEFAULT_FONT_DIR: &str = "./Inter/static";

/// Family name written into every declaration when none is given
pub const DEFAULT_FAMILY_NAME: &str = "Inter";

/// Recognized extensions, compared lowercased and without the leading dot
pub const DEFAULT_FONT_FORMATS: &[(&str, FontFormat)] = &[
    ("woff2", FontFormat::Woff2),
    ("woff", FontFormat::Woff),
    ("ttf", FontFormat::TrueType),
];

/// Weight keywords, scanned in order; the first substring hit wins.
///
/// `extralight` sits before `light`, `semibold` and `extrabold` before `bold`,
/// so compound names resolve to their own weight.
pub const DEFAULT_WEIGHT_KEYWORDS: &[(&str, u16)] = &[
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("regular", 400),
    ("medium", 500),
    ("semibold", 600),
    ("extrabold", 800),
    ("bold", 700),
    ("black", 900),
];

/// Configuration for a generation pass
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Root of the directory tree to scan
    pub font_dir: PathBuf,
    /// Family name used in every declaration
    pub family_name: String,
    /// Extension to format table
    pub font_formats: Vec<(String, FontFormat)>,
    /// Ordered weight keyword table, matched case-insensitively
    pub weight_keywords: Vec<(String, u16)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_mode: false,
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            family_name: DEFAULT_FAMILY_NAME.to_string(),
            font_formats: DEFAULT_FONT_FORMATS
                .iter()
                .map(|(ext, format)| (ext.to_string(), *format))
                .collect(),
            weight_keywords: DEFAULT_WEIGHT_KEYWORDS
                .iter()
                .map(|(keyword, weight)| (keyword.to_string(), *weight))
                .collect(),
        }
    }
}

impl Config {
    /// Create a new configuration with the default tables
    pub fn new(font_dir: impl Into<PathBuf>, family_name: impl Into<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            family_name: family_name.into(),
            ..Self::default()
        }
    }

    /// Check the user-supplied parts of the configuration
    pub fn validate(&self) -> Result<()> {
        if self.family_name.trim().is_empty() {
            return Err(Error::Config("family name must not be empty".to_string()));
        }
        if self.font_dir.as_os_str().is_empty() {
            return Err(Error::InvalidPath(self.font_dir.clone()));
        }
        Ok(())
    }
}
