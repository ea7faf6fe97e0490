use std::path::Path;

use log::debug;

use crate::models::{Config, FontFormat, FontStyle};
use super::{format::format_for_path, weight::{determine_style, determine_weight}};

/// Infer format, weight and style for a font file from its name.
///
/// Returns `None` when the extension is not one of the configured formats.
/// Weight and style come from the last path component only, so directory
/// names such as `Bold/` never leak into the result.
pub fn extract_face_metadata(
    path: &Path,
    config: &Config,
) -> Option<(FontFormat, u16, FontStyle)> {
    let format = match format_for_path(path, &config.font_formats) {
        Some(format) => format,
        None => {
            debug!("Unrecognized font extension: {}", path.display());
            return None;
        }
    };

    let file_name = path.file_name()?.to_string_lossy();
    let weight = determine_weight(&file_name, &config.weight_keywords);
    let style = determine_style(&file_name);

    debug!(
        "Metadata inferred - File: {}, Format: {}, Weight: {}, Style: {}",
        file_name, format, weight, style
    );

    Some((format, weight, style))
}
