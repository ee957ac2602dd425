//! Log setup for the binary. Libraries only use the `log` macros.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding the log filter, e.g. `SHIFT_LOG=debug`.
pub const LOG_ENV: &str = "SHIFT_LOG";

/// Level forced by `-v` flags. Zero leaves the environment in charge.
pub fn level_for(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        _ => Some(LevelFilter::Debug),
    }
}

/// Sends log records to stderr, filtered by [`LOG_ENV`] (default `warn`)
/// unless `-v` raised the level.
pub fn init(verbosity: u8) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
    if let Some(level) = level_for(verbosity) {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), None);
        assert_eq!(level_for(1), Some(LevelFilter::Info));
        assert_eq!(level_for(2), Some(LevelFilter::Debug));
        assert_eq!(level_for(7), Some(LevelFilter::Debug));
    }
}
