pub mod logging;
pub mod path;

pub use logging::init_logging;
pub use path::{relative_path, to_url_path};
