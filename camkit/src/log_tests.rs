//! Unit tests for log.rs
//!
//! The logger and severity filter are process-wide, so tests that swap them
//! run under #[serial] and only inspect entries carrying their own source tag.

use crate::log::{self, DefaultLogger, LogEntry, LogSeverity, Logger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_round_trips_through_u8() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity as u8), severity);
    }
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "camkit::tests".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "camkit::tests".to_string(),
        message: "detailed entry".to_string(),
        file: Some("log_tests.rs"),
        line: Some(7),
    });
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let entries = install_capture();

    crate::camkit_info!("log_tests::custom", "camera {} ready", 1);
    crate::camkit_warn!("log_tests::custom", "scope already open");

    let captured = from_source(&entries, "log_tests::custom");
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "camera 1 ready");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert!(captured[1].file.is_none());

    log::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_carries_file_and_line() {
    let entries = install_capture();

    crate::camkit_error!("log_tests::detailed", "bad texture {}", 4);

    let captured = from_source(&entries, "log_tests::detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "bad texture 4");
    assert!(captured[0].file.unwrap().ends_with("log_tests.rs"));
    assert!(captured[0].line.is_some());

    log::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let entries = install_capture();

    log::set_min_severity(LogSeverity::Warn);
    assert!(!log::enabled(LogSeverity::Info));
    crate::camkit_debug!("log_tests::filter", "dropped");
    crate::camkit_info!("log_tests::filter", "dropped too");
    crate::camkit_warn!("log_tests::filter", "kept");

    log::set_min_severity(LogSeverity::Trace);
    crate::camkit_trace!("log_tests::filter", "kept as well");

    let captured = from_source(&entries, "log_tests::filter");
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].message, "kept");
    assert_eq!(captured[1].severity, LogSeverity::Trace);

    log::set_min_severity(LogSeverity::Info);
    log::reset_logger();
}
