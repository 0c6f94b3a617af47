// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! End-to-end checks of the log-sink half of the assertion contract.
//!
//! Installs a capturing logger in place of the engine's sink and verifies
//! that every failed assertion emits exactly one error-severity line whose
//! text matches the stored record message, and that passing assertions
//! emit nothing.

use std::sync::{Mutex, OnceLock};

use ktest::{CallSite, FailureKind, TestSession, assert_equal, assert_true};
use log::{Level, LevelFilter, Log, Metadata, Record};

static CAPTURED: OnceLock<Mutex<Vec<(Level, String)>>> = OnceLock::new();

fn captured() -> &'static Mutex<Vec<(Level, String)>> {
    CAPTURED.get_or_init(|| Mutex::new(Vec::new()))
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        captured()
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn init_capture() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

#[test]
fn test_failed_assertion_mirrors_record_to_log() {
    init_capture();

    let mut session = TestSession::new();
    session.begin("mirror");
    let site = CallSite::new("mirror_fn", 42, "mirror.rs");
    assert!(!assert_equal(&mut session, 5, 6, site, "x", "y"));

    let record = session.finish().unwrap();
    let (kind, stored) = record.failure().unwrap();
    assert_eq!(kind, FailureKind::AssertEqual);
    assert_eq!(stored, "mirror_fn::42 Value x != y (5 != 6)!");

    // Exactly one log line for this failure, at error severity, with text
    // identical to the stored message.
    let lines = captured().lock().unwrap();
    let matching: Vec<_> = lines
        .iter()
        .filter(|(_, text)| text.contains("mirror_fn"))
        .collect();
    assert_eq!(matching.len(), 1);
    let (level, text) = matching[0];
    assert_eq!(*level, Level::Error);
    assert_eq!(text.as_str(), stored);
}

#[test]
fn test_passing_assertion_emits_no_log_line() {
    init_capture();

    let mut session = TestSession::new();
    session.begin("quiet");
    let site = CallSite::new("quiet_fn", 7, "quiet.rs");
    assert!(assert_equal(&mut session, 5, 5, site, "a", "a"));
    assert!(assert_true(&mut session, true, site, "cond"));

    let record = session.finish().unwrap();
    assert!(record.passed());

    let lines = captured().lock().unwrap();
    assert!(lines.iter().all(|(_, text)| !text.contains("quiet_fn")));
}

#[test]
fn test_overwritten_failure_still_logs_each_occurrence() {
    init_capture();

    let mut session = TestSession::new();
    session.begin("twice");
    let site = CallSite::new("twice_fn", 9, "twice.rs");
    assert!(!assert_true(&mut session, false, site, "first_check"));
    assert!(!assert_true(&mut session, false, site, "second_check"));

    // The record keeps only the last failure, but the sink saw both.
    let record = session.finish().unwrap();
    let (_, stored) = record.failure().unwrap();
    assert!(stored.contains("second_check"));

    let lines = captured().lock().unwrap();
    let count = lines
        .iter()
        .filter(|(level, text)| *level == Level::Error && text.contains("twice_fn"))
        .count();
    assert_eq!(count, 2);
}
