//! Tracing subscriber setup for the binaries.
//!
//! The library only emits events; installing a subscriber is left to `main`.
//! `RUST_LOG` overrides the default filter.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Log to stderr. Used by the headless simulator.
pub fn init_stderr(default_filter: &str) {
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(io::stderr)
        .try_init();
}

/// Log to a file so the terminal UI is not drawn over.
pub fn init_file(path: &Path, default_filter: &str) -> io::Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
