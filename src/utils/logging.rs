use log::LevelFilter;

/// Route diagnostics to stderr; debug mode lowers the threshold to `Debug`.
///
/// `RUST_LOG` is still read, but the level chosen here takes precedence.
pub fn init_logging(debug_mode: bool) {
    let level = if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // A second initialization (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
