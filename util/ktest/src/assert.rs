// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion operations.
//!
//! Each operation evaluates one predicate over its operands. A passing
//! check returns `true` with no side effect at all. A failing check
//! formats a diagnostic carrying the call site and the operand
//! descriptions, records it against the active test, mirrors the
//! identical text to the log sink at error severity, and returns `false`.
//! Failure is an ordinary outcome here, never an `Err`; the test body or
//! the runner above it decides whether to keep going.

use core::fmt;

use kstatus::KStatus;
use log::error;

use crate::record::{FailureKind, TestContext, format_message, record_failure};

/// Source location of an assertion call.
///
/// Built by the [`callsite!`](crate::callsite) macro at each call site;
/// the stored diagnostic leads with `function::line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Enclosing function or module path.
    pub function: &'static str,
    /// Source line of the call.
    pub line: u32,
    /// Source file of the call.
    pub file: &'static str,
}

impl CallSite {
    pub const fn new(function: &'static str, line: u32, file: &'static str) -> Self {
        Self {
            function,
            line,
            file,
        }
    }
}

/// Shared failure path: build the bounded diagnostic, stamp it into the
/// active record, mirror it to the log sink, report the check as failed.
///
/// The stored message and the emitted log line carry identical text, so
/// record-based and log-based reporting agree. The recorder's result is
/// dropped here: it can only fail when the engine above is broken, and
/// the operation's contract is the returned `bool`.
fn fail(
    ctx: &mut dyn TestContext,
    kind: FailureKind,
    site: &CallSite,
    args: fmt::Arguments<'_>,
) -> bool {
    let msg = format_message(format_args!("{}::{} {}", site.function, site.line, args));
    let _ = record_failure(ctx, kind, &msg);
    error!("{msg}");
    false
}

/// Reports whether `expression` is true.
pub fn assert_true(
    ctx: &mut dyn TestContext,
    expression: bool,
    site: CallSite,
    description: &str,
) -> bool {
    if expression {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertTrue,
            &site,
            format_args!("Expression ({description}) is not true!"),
        )
    }
}

/// Reports whether `expression` is false.
pub fn assert_false(
    ctx: &mut dyn TestContext,
    expression: bool,
    site: CallSite,
    description: &str,
) -> bool {
    if !expression {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertFalse,
            &site,
            format_args!("Expression ({description}) is not false!"),
        )
    }
}

/// Reports whether `status` is a non-error status.
///
/// Warning statuses do not carry the error bit and pass this check.
pub fn assert_not_error(
    ctx: &mut dyn TestContext,
    status: KStatus,
    site: CallSite,
    description: &str,
) -> bool {
    if !status.is_error() {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertNotError,
            &site,
            format_args!("Status '{description}' is an error ({status})!"),
        )
    }
}

/// Reports whether two 64-bit unsigned values are equal.
pub fn assert_equal(
    ctx: &mut dyn TestContext,
    value_a: u64,
    value_b: u64,
    site: CallSite,
    description_a: &str,
    description_b: &str,
) -> bool {
    if value_a == value_b {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertEqual,
            &site,
            format_args!("Value {description_a} != {description_b} ({value_a} != {value_b})!"),
        )
    }
}

/// Reports whether two 64-bit unsigned values differ.
pub fn assert_not_equal(
    ctx: &mut dyn TestContext,
    value_a: u64,
    value_b: u64,
    site: CallSite,
    description_a: &str,
    description_b: &str,
) -> bool {
    if value_a != value_b {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertNotEqual,
            &site,
            format_args!("Value {description_a} == {description_b} ({value_a} == {value_b})!"),
        )
    }
}

/// Reports whether `status` matches the expected status exactly.
pub fn assert_status_equal(
    ctx: &mut dyn TestContext,
    status: KStatus,
    expected: KStatus,
    site: CallSite,
    description: &str,
) -> bool {
    if status == expected {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertStatusEqual,
            &site,
            format_args!("Status '{description}' is {status}, should be {expected}!"),
        )
    }
}

/// Reports whether `pointer` refers to something.
pub fn assert_not_null<T: ?Sized>(
    ctx: &mut dyn TestContext,
    pointer: Option<&T>,
    site: CallSite,
    name: &str,
) -> bool {
    if pointer.is_some() {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertNotNull,
            &site,
            format_args!("Pointer ({name}) is null!"),
        )
    }
}

/// Compares the first `len` bytes of two regions.
///
/// A `len` of 0 trivially succeeds. Both regions must be at least `len`
/// bytes long. The failure diagnostic names the compared length, not the
/// differing bytes, and is classified as [`FailureKind::AssertEqual`].
pub fn assert_mem_equal(
    ctx: &mut dyn TestContext,
    region_a: &[u8],
    region_b: &[u8],
    len: usize,
    site: CallSite,
    description_a: &str,
    description_b: &str,
) -> bool {
    if region_a[..len] == region_b[..len] {
        true
    } else {
        fail(
            ctx,
            FailureKind::AssertEqual,
            &site,
            format_args!("Memory {description_a} != {description_b} over {len} bytes!"),
        )
    }
}
