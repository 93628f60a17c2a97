//! JSON structured logging for the label tooling

use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// Environment variable selecting the log level (`json`, `json:debug`, `info`, ...)
pub const LOG_LEVEL_ENV: &str = "TTARIUS_LOG_LEVEL";

/// Environment variable redirecting JSON output to a file
pub const LOG_PATH_ENV: &str = "TTARIUS_LOG_PATH";

/// JSON logger implementation
#[derive(Debug)]
pub struct JsonLogger {
    level: LevelFilter,
    target_file: Mutex<Option<std::fs::File>>,
}

/// Split a level string into (json mode, bare level)
fn parse_level_spec(level_str: &str) -> (bool, &str) {
    if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    }
}

fn level_filter(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

impl JsonLogger {
    /// Create a new JSON logger
    pub fn new(level: LevelFilter, log_path: Option<String>) -> Self {
        let target_file = if let Some(path) = log_path {
            OpenOptions::new().create(true).append(true).open(path).ok()
        } else {
            None
        };

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize the logger; returns the effective level and where it came from
    pub fn init_with_level(level_str: &str, source: &str) -> (String, String) {
        let log_path = env::var(LOG_PATH_ENV).ok();
        let (use_json, actual_level) = parse_level_spec(level_str);

        if !use_json {
            // Plain mode: env_logger with a compact prefix
            let _ = env_logger::Builder::new()
                .filter_level(level_filter(actual_level))
                .format(|buf, record| {
                    write!(buf, "🏷️ ")?;
                    write!(
                        buf,
                        "[{} {} {}] ",
                        Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                        record.level(),
                        record.target()
                    )?;
                    writeln!(buf, "{}", record.args())
                })
                .try_init();
            return (actual_level.to_string(), source.to_string());
        }

        let level = level_filter(actual_level);
        let logger = Box::new(JsonLogger::new(level, log_path));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return (actual_level.to_string(), source.to_string());
        }

        log::set_max_level(level);
        (actual_level.to_string(), source.to_string())
    }

    /// Initialize from `TTARIUS_LOG_LEVEL`, defaulting to warnings only
    pub fn init() -> (String, String) {
        let log_level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "warn".to_string());
        Self::init_with_level(&log_level, LOG_LEVEL_ENV)
    }

    fn format_entry(record: &Record<'_>) -> String {
        let log_entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        });

        format!("{}\n", serde_json::to_string(&log_entry).unwrap_or_default())
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let json_string = Self::format_entry(record);

        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(json_string.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(json_string.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use tempfile::TempDir;

    #[test]
    fn test_parse_level_spec() {
        assert_eq!(parse_level_spec("json"), (true, "info"));
        assert_eq!(parse_level_spec("json:debug"), (true, "debug"));
        assert_eq!(parse_level_spec("warn"), (false, "warn"));
    }

    #[test]
    fn test_level_filter_defaults_to_info() {
        assert_eq!(level_filter("trace"), LevelFilter::Trace);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_json_logger_writes_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.log");
        let logger = JsonLogger::new(LevelFilter::Info, Some(path.to_string_lossy().to_string()));

        logger.log(
            &Record::builder()
                .args(format_args!("rendered label"))
                .level(Level::Info)
                .target("ttarius_labels::barcode")
                .build(),
        );
        // Filtered out by level
        logger.log(
            &Record::builder()
                .args(format_args!("noise"))
                .level(Level::Trace)
                .target("ttarius_labels::barcode")
                .build(),
        );
        logger.flush();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);

        let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["@level"], "info");
        assert_eq!(entry["@message"], "rendered label");
        assert_eq!(entry["@module"], "ttarius_labels::barcode");
    }

    #[test]
    fn test_json_logger_off_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quiet.log");
        let logger = JsonLogger::new(
            level_filter(parse_level_spec("json:off").1),
            Some(path.to_string_lossy().to_string()),
        );

        logger.log(
            &Record::builder()
                .args(format_args!("should not appear"))
                .level(Level::Error)
                .target("ttarius_labels")
                .build(),
        );
        logger.flush();

        assert!(!logger.enabled(&Metadata::builder().level(Level::Error).build()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
