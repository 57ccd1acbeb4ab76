//! Diagnostic logging.
//!
//! Events go to an append-mode log file and, unless running quietly, to
//! stderr so stdout carries nothing but generated names. `RUST_LOG`
//! overrides the file level. When logging is disabled no subscriber is
//! installed and every `tracing` call site is a no-op.

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init(settings: &LoggingConfig, console: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .with_context(|| format!("Failed to open log file {}", settings.file.display()))?;

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(file_filter);

    let console_layer = console.then(|| {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::new(&settings.console_level))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;
    Ok(())
}
