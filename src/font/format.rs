use std::path::Path;

use crate::models::FontFormat;

/// Look up the format for an extension, with or without its leading dot
pub fn format_from_extension(
    extension: &str,
    formats: &[(String, FontFormat)],
) -> Option<FontFormat> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);

    formats
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, format)| *format)
}

/// Format of the file at `path`, or `None` when its extension is not recognized
pub fn format_for_path(path: &Path, formats: &[(String, FontFormat)]) -> Option<FontFormat> {
    let extension = path.extension()?.to_str()?;
    format_from_extension(extension, formats)
}

/// Check if a path has one of the recognized font extensions
pub fn is_font_file(path: &Path, formats: &[(String, FontFormat)]) -> bool {
    format_for_path(path, formats).is_some()
}
