// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion and failure-recording core of the unit test framework.
//!
//! A running test case reports each check through one of the assertion
//! operations in [`assert`] (usually via the `check_*` wrapper macros,
//! which capture the call site and operand text). On failure the operation
//! stamps a classified diagnostic into the active [`TestRecord`] and
//! mirrors the identical line to the log sink at error severity; on
//! success it stays silent. Every operation reports its outcome as a plain
//! `bool`, so the test body or the runner above it decides whether a
//! failed check aborts the rest of the test.
//!
//! Test discovery, scheduling and result reporting live in the
//! surrounding engine; this crate only borrows the engine-owned session
//! through [`TestContext`] for the duration of one call.

#![cfg_attr(not(test), no_std)]

pub mod assert;
mod macros;
pub mod record;

// Re-export the assertion operations and the call-site type used by the
// wrapper macros.
pub use assert::{
    CallSite, assert_equal, assert_false, assert_mem_equal, assert_not_equal, assert_not_error,
    assert_not_null, assert_status_equal, assert_true,
};
// Re-export the failure-recording contract and the record types read by
// the reporting layer.
pub use record::{
    FAILURE_MSG_LEN, FailureKind, FailureMessage, RecordError, TestContext, TestRecord,
    TestSession, record_failure,
};
