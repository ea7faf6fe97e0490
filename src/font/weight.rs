use crate::models::FontStyle;

/// Weight used when no keyword matches
pub const REGULAR_WEIGHT: u16 = 400;

/// Determine the weight value from a file name.
///
/// Keywords are tried in table order and the first one found as a substring
/// of the name wins, so the table order decides overlaps such as `bold`
/// inside `extrabold`. Both sides are compared lowercased.
pub fn determine_weight<K: AsRef<str>>(file_name: &str, keywords: &[(K, u16)]) -> u16 {
    let name_lower = file_name.to_lowercase();

    keywords
        .iter()
        .find(|(keyword, _)| {
            name_lower.contains(&AsRef::<str>::as_ref(keyword).to_lowercase())
        })
        .map(|(_, weight)| *weight)
        .unwrap_or(REGULAR_WEIGHT)
}

/// Check if a font is italic based on its file name
pub fn is_italic_font(file_name: &str) -> bool {
    file_name.to_lowercase().contains("italic")
}

/// Style keyword for a file name
pub fn determine_style(file_name: &str) -> FontStyle {
    if is_italic_font(file_name) {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    }
}
