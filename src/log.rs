//! Logging setup for the CLI

use log::LevelFilter;

/// Initialize the logger.
///
/// # Behavior
/// - `Info` level when `verbose` is set, otherwise `Warn`.
/// - `RUST_LOG`, if set, overrides the default filter.
/// - Calling it more than once is harmless; later calls are ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
