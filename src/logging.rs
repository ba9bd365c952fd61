/// Logger setup for the CLI.
use log::LevelFilter;

/// Install `env_logger` at `level`. `RUST_LOG`, when set, takes precedence.
///
/// Logs go to stderr without timestamps or targets so they interleave
/// cleanly with command output on stdout.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
