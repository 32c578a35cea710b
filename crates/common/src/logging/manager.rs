//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::ParseError,
    fmt::{layer, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use super::types::LoggerConfig;

/// Builds the level filter: INFO by default, overridable via `RUST_LOG`, with the
/// config's extra directives applied last.
pub fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, ParseError> {
    let mut filt = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    for directive in &config.directives {
        filt = filt.add_directive(directive.parse()?);
    }

    Ok(filt)
}

/// Installs the global subscriber, failing if one is already set.
///
/// Invalid extra directives are reported and skipped rather than aborting
/// startup.
pub fn try_init(config: LoggerConfig) -> Result<(), TryInitError> {
    let filt = build_env_filter(&config).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log directives: {err}");
        EnvFilter::new(Level::INFO.as_str())
    });

    let console = if config.stdout_config.to_stderr {
        BoxMakeWriter::new(io::stderr)
    } else {
        BoxMakeWriter::new(io::stdout)
    };

    // Configure console logging with JSON or compact format
    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(console)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(console)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    // Build optional file logging layer
    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()?;

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );

    Ok(())
}

/// Initializes the logging subsystem with the provided config.
///
/// A subscriber that is already installed (for example by a test harness) is
/// left in place.
pub fn init(config: LoggerConfig) {
    if let Err(err) = try_init(config) {
        eprintln!("logging already initialized: {err}");
    }
}
