use std::fmt;

/// Font container formats understood by `@font-face` `format()` hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    /// "woff2"
    Woff2,
    /// "woff"
    Woff,
    /// "truetype"
    TrueType,
}

impl FontFormat {
    /// The identifier used inside `format('...')`
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFormat::Woff2 => "woff2",
            FontFormat::Woff => "woff",
            FontFormat::TrueType => "truetype",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slant classification of a font file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// "normal"
    #[default]
    Normal,
    /// "italic"
    Italic,
}

impl FontStyle {
    /// The keyword used for `font-style`
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render one `@font-face` block for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// Path relative to the base directory, always with forward slashes
    pub url_path: String,
    /// Container format derived from the extension
    pub format: FontFormat,
    /// Numeric weight, 100 to 900
    pub weight: u16,
    /// Normal or italic
    pub style: FontStyle,
}

impl FontFace {
    /// Render the declaration block for this face under `family_name`
    pub fn to_css(&self, family_name: &str) -> String {
        format!(
            "@font-face {{\n  font-family: '{}';\n  src: url('{}') format('{}');\n  \
             font-weight: {};\n  font-style: {};\n}}",
            family_name, self.url_path, self.format, self.weight, self.style
        )
    }
}
