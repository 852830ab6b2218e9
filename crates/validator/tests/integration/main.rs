//! Integration tests for ruleval-validator.
//!
//! One binary, one module per concern.

mod custom_checker;
mod derive;
mod end_to_end;
mod locale;
mod properties;
mod snapshots;

/// Installs a test subscriber once; `RUST_LOG=ruleval_validator=debug`
/// shows dispatch traces.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
