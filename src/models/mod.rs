//! Configuration and per-file font records

pub mod config;
pub mod font;

pub use config::{
    Config, DEFAULT_FAMILY_NAME, DEFAULT_FONT_DIR, DEFAULT_FONT_FORMATS, DEFAULT_WEIGHT_KEYWORDS,
};
pub use font::{FontFace, FontFormat, FontStyle};
