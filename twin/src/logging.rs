//! Log setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive such as `twin_codegen=debug`.
pub const LOG_ENV: &str = "TWIN_LOG";

/// Install the stderr subscriber.
///
/// `TWIN_LOG` wins when set; otherwise the level starts at `warn` and each
/// `-v` raises it one step.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // A second install (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }
}
