use crate::config::{Config, TRACING_LEVEL_VAR};
use std::env::var;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing from RUST_LOG env var if present or falls back to `level`.
/// CloudWatch adds its own timestamps and does not render colour codes.
pub fn init_tracing(level: tracing::Level) {
    let directives = var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level, &directives))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

/// Reports an unparsable `OCR_LAMBDA_TRACING_LEVEL`. Must be called after `init_tracing`.
pub fn warn_on_invalid_level(config: &Config) {
    if let Some(v) = &config.invalid_tracing_level {
        warn!(
            "Invalid tracing level in {TRACING_LEVEL_VAR}: {v}. Using {}. Valid values: trace, debug, info, warn, error",
            config.tracing_level
        );
    }
}

/// Builds the filter from RUST_LOG-style `directives`. Invalid directives are dropped
/// and `level` applies when none are left.
fn env_filter(level: tracing::Level, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(directives)
}
