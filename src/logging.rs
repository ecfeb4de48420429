//! Structured logging setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Pick the filter directive: explicit flag, then `RUST_LOG`, then config.
pub fn resolve_filter(flag: Option<&str>, config: &LoggingConfig) -> String {
    if let Some(f) = flag {
        return f.to_string();
    }
    match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => env,
        _ => config.filter.clone(),
    }
}

/// Initialize the global subscriber. Later calls are no-ops.
pub fn init_logging(filter: &str, json: bool) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let cfg = LoggingConfig::default();
        assert_eq!(resolve_filter(Some("debug"), &cfg), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("not a == valid filter", false);
        init_logging("info", true);
    }
}
