// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Test records and the failure recorder.
//!
//! Each in-flight test owns one [`TestRecord`]. The recorder writes at
//! most one classified failure into it; a later failing assertion
//! overwrites an earlier one. The message buffer has a fixed capacity and
//! writes into it truncate instead of overflowing.

use core::fmt;

use heapless::String;

/// Maximum length in bytes of a recorded failure message.
///
/// The record's storage is sized to this constant; formatting a longer
/// diagnostic truncates on a UTF-8 boundary.
pub const FAILURE_MSG_LEN: usize = 120;

/// Bounded text buffer holding one failure diagnostic.
pub type FailureMessage = String<FAILURE_MSG_LEN>;

/// Classification of a recorded assertion failure.
///
/// Memory-equality failures reuse [`FailureKind::AssertEqual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    AssertTrue,
    AssertFalse,
    AssertNotError,
    AssertEqual,
    AssertNotEqual,
    AssertStatusEqual,
    AssertNotNull,
}

/// Outcome bookkeeping for one test case.
///
/// Created or reset by the surrounding engine before the test body runs,
/// mutated only by [`record_failure`] while the test is in flight, and
/// read by the reporting layer once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    name: &'static str,
    failure: Option<(FailureKind, FailureMessage)>,
}

impl TestRecord {
    /// Creates a fresh record with no failure.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            failure: None,
        }
    }

    /// Name of the test case this record belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The recorded failure, if any.
    pub fn failure(&self) -> Option<(FailureKind, &str)> {
        self.failure.as_ref().map(|(kind, msg)| (*kind, msg.as_str()))
    }

    /// Returns `true` while no failure has been recorded.
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// Clears any recorded failure, returning the record to its pre-run
    /// state.
    pub fn reset(&mut self) {
        self.failure = None;
    }
}

/// Borrowed view of the engine-owned test-execution context.
///
/// The engine that schedules test cases owns the session object; the
/// assertion operations only need to reach the record of the test
/// currently running. Returns `None` when no test is active, in which
/// case assertions must not be invoked.
pub trait TestContext {
    fn current_test(&mut self) -> Option<&mut TestRecord>;
}

/// Minimal session holding the record of the test currently running.
///
/// Discovery, scheduling and reporting are the engine's concern; this
/// type only covers the begin/finish lifecycle the recorder needs, and it
/// is what this crate's own tests drive.
#[derive(Debug, Default)]
pub struct TestSession {
    current: Option<TestRecord>,
}

impl TestSession {
    /// Creates a session with no test running.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Starts a fresh record for `name`, replacing any previous one.
    pub fn begin(&mut self, name: &'static str) {
        self.current = Some(TestRecord::new(name));
    }

    /// Ends the active test, handing its record to the reporting layer.
    pub fn finish(&mut self) -> Option<TestRecord> {
        self.current.take()
    }
}

impl TestContext for TestSession {
    fn current_test(&mut self) -> Option<&mut TestRecord> {
        self.current.as_mut()
    }
}

/// Caller-misuse errors reported by [`record_failure`].
///
/// These signal a broken engine above the framework, not a failed test
/// check, and are local and recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The context has no test running.
    NoActiveTest,
    /// The failure message text was empty.
    EmptyMessage,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NoActiveTest => write!(f, "no test is currently running"),
            RecordError::EmptyMessage => write!(f, "failure message is empty"),
        }
    }
}

/// `fmt::Write` adapter over a [`FailureMessage`] that truncates on a
/// UTF-8 boundary once the buffer is full, instead of reporting an error.
struct TruncatingWrite<'a>(&'a mut FailureMessage);

impl fmt::Write for TruncatingWrite<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let free = self.0.capacity() - self.0.len();
        if s.len() <= free {
            let _ = self.0.push_str(s);
        } else {
            let mut end = free;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            let _ = self.0.push_str(&s[..end]);
        }
        Ok(())
    }
}

/// Formats `args` into a fresh bounded message, truncating if needed.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> FailureMessage {
    let mut msg = FailureMessage::new();
    let _ = fmt::Write::write_fmt(&mut TruncatingWrite(&mut msg), args);
    msg
}

/// Records a classified failure against the currently running test.
///
/// Overwrites any failure recorded earlier in the same test (silently;
/// the last failing assertion wins). `message` is copied into the
/// record's bounded buffer, truncating at [`FAILURE_MSG_LEN`] bytes, so
/// the caller's transient buffer may be dropped afterwards.
pub fn record_failure(
    ctx: &mut dyn TestContext,
    kind: FailureKind,
    message: &str,
) -> Result<(), RecordError> {
    if message.is_empty() {
        return Err(RecordError::EmptyMessage);
    }
    let record = ctx.current_test().ok_or(RecordError::NoActiveTest)?;

    let mut copy = FailureMessage::new();
    let _ = fmt::Write::write_str(&mut TruncatingWrite(&mut copy), message);
    record.failure = Some((kind, copy));
    Ok(())
}
