//! Filename-based inference of font format, weight and style

pub mod format;
pub mod metadata;
pub mod weight;

pub use format::{format_for_path, format_from_extension, is_font_file};
pub use metadata::extract_face_metadata;
pub use weight::{determine_style, determine_weight, is_italic_font, REGULAR_WEIGHT};
