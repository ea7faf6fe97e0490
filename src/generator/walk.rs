use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::font::is_font_file;
use crate::models::{Config, FontFormat};

/// Recursive listing of the font files under a root directory.
///
/// Entries come out in the order the filesystem reports them, depth first, so
/// a subdirectory's files may appear before files that sit later in its
/// parent. Symlinked files are listed; symlinked directories are not entered.
/// A root that is missing or unreadable simply yields nothing.
pub struct FontDirectory {
    root: PathBuf,
    font_formats: Vec<(String, FontFormat)>,
}

impl FontDirectory {
    /// List the files under `root` whose extension is in `config.font_formats`
    pub fn new(root: impl AsRef<Path>, config: &Config) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            font_formats: config.font_formats.clone(),
        }
    }

    /// Directory the listing starts from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IntoIterator for FontDirectory {
    type Item = PathBuf;
    type IntoIter = Box<dyn Iterator<Item = PathBuf>>;

    fn into_iter(self) -> Self::IntoIter {
        let font_formats = self.font_formats;

        let files = WalkDir::new(self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.into_path())
            .filter(move |path| is_font_file(path, &font_formats));

        Box::new(files)
    }
}
