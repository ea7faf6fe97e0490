//! Generate `@font-face` declarations for a directory of font files.
//!
//! Weight and style are inferred from each file name, the format from its
//! extension:
//!
//! ```
//! use std::path::Path;
//! use fontface::{Config, Generator};
//!
//! let config = Config::default();
//! let generator = Generator::with_base_dir(&config, "/srv/site");
//! let css = generator
//!     .generate_font_face(Path::new("/srv/site/Inter/static/Inter-BoldItalic.woff2"))
//!     .unwrap();
//! assert!(css.contains("font-weight: 700;"));
//! assert!(css.contains("font-style: italic;"));
//! ```

pub mod cli;
pub mod error;
pub mod font;
pub mod generator;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use generator::{run, FontDirectory, Generator};
pub use models::{Config, FontFace, FontFormat, FontStyle};
