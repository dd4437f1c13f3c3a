//! Logging init: diagnostics go to stderr so prompts on stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Default filter for a verbosity count; `RUST_LOG` overrides it.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,rtvesub_core=info",
        _ => "debug,rtvesub_core=debug",
    }
}

/// Initialize structured logging to stderr.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
