//! Unit tests for the logging subsystem.

use std::path::PathBuf;

use tracing_subscriber::fmt::format::FmtSpan;

use super::{Rotation, manager::build_env_filter, types::*};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "(custody-service)");
    assert!(config.directives.is_empty());
    assert!(!config.stdout_config.json_format);
    assert!(!config.stdout_config.to_stderr);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_builders() {
    let file = FileLoggingConfig::new(PathBuf::from("/tmp/logs"), "custody".to_string())
        .with_rotation(Rotation::HOURLY)
        .with_json_format(true);

    let config = LoggerConfig::new("datatool".to_string())
        .with_json_logging(true)
        .with_fmt_span(FmtSpan::CLOSE)
        .with_stderr(true)
        .with_directive("custody_operator=debug")
        .with_file_logging(file);

    assert_eq!(config.service_name, "datatool");
    assert!(config.stdout_config.json_format);
    assert!(config.stdout_config.to_stderr);
    assert_eq!(config.directives, vec!["custody_operator=debug".to_string()]);

    let file = config.file_logging_config.unwrap();
    assert_eq!(file.file_name_prefix, "custody");
    assert!(file.json_format);
}

#[test]
fn test_file_logging_defaults_to_daily_compact() {
    let file = FileLoggingConfig::new(PathBuf::from("logs"), "custody".to_string());
    assert!(!file.json_format);
    assert_eq!(file.rotation, Rotation::DAILY);
}

#[test]
fn test_env_filter_accepts_valid_directives() {
    let config = LoggerConfig::default()
        .with_directive("custody_operator=debug")
        .with_directive("warn");
    assert!(build_env_filter(&config).is_ok());
}

#[test]
fn test_env_filter_rejects_malformed_directive() {
    let config = LoggerConfig::default().with_directive("custody_operator=notalevel");
    assert!(build_env_filter(&config).is_err());
}

#[test]
fn test_file_layer_writes_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = FileLoggingConfig::new(dir.path().to_path_buf(), "custody".to_string())
        .with_rotation(Rotation::NEVER);

    let appender = tracing_appender::rolling::RollingFileAppender::new(
        file.rotation.clone(),
        &file.directory,
        &file.file_name_prefix,
    );
    drop(appender);

    assert!(dir.path().join("custody").exists());
}
