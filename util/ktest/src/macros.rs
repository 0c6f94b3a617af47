// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Wrapper macros for the assertion operations.
//!
//! Test bodies normally go through these instead of the functions in
//! [`assert`](crate::assert): each macro captures the call site and the
//! operand source text, expands to exactly one assertion call, and
//! yields its `bool` outcome so checks can be chained or short-circuited.

/// Captures the [`CallSite`](crate::CallSite) of the invoking line.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(module_path!(), line!(), file!())
    };
}

/// Checks that a boolean expression is true.
///
/// # Example
/// ```
/// # use ktest::TestSession;
/// # let mut session = TestSession::new();
/// # session.begin("doc");
/// let ok = ktest::check!(&mut session, 1 + 1 == 2);
/// assert!(ok);
/// ```
#[macro_export]
macro_rules! check {
    ($ctx:expr, $expr:expr) => {
        $crate::assert_true($ctx, $expr, $crate::callsite!(), stringify!($expr))
    };
}

/// Checks that a boolean expression is false.
#[macro_export]
macro_rules! check_false {
    ($ctx:expr, $expr:expr) => {
        $crate::assert_false($ctx, $expr, $crate::callsite!(), stringify!($expr))
    };
}

/// Checks that two integer values are equal, comparing as `u64`.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::assert_equal(
            $ctx,
            ($a) as u64,
            ($b) as u64,
            $crate::callsite!(),
            stringify!($a),
            stringify!($b),
        )
    };
}

/// Checks that two integer values differ, comparing as `u64`.
#[macro_export]
macro_rules! check_ne {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::assert_not_equal(
            $ctx,
            ($a) as u64,
            ($b) as u64,
            $crate::callsite!(),
            stringify!($a),
            stringify!($b),
        )
    };
}

/// Checks that a status code is not an error.
#[macro_export]
macro_rules! check_not_err {
    ($ctx:expr, $status:expr) => {
        $crate::assert_not_error($ctx, $status, $crate::callsite!(), stringify!($status))
    };
}

/// Checks that a status code matches the expected one exactly.
#[macro_export]
macro_rules! check_status_eq {
    ($ctx:expr, $status:expr, $expected:expr) => {
        $crate::assert_status_equal(
            $ctx,
            $status,
            $expected,
            $crate::callsite!(),
            stringify!($status),
        )
    };
}

/// Checks that an optional reference is present.
#[macro_export]
macro_rules! check_not_null {
    ($ctx:expr, $ptr:expr) => {
        $crate::assert_not_null($ctx, $ptr, $crate::callsite!(), stringify!($ptr))
    };
}

/// Checks that the first `len` bytes of two regions are identical.
#[macro_export]
macro_rules! check_mem_eq {
    ($ctx:expr, $a:expr, $b:expr, $len:expr) => {
        $crate::assert_mem_equal(
            $ctx,
            $a,
            $b,
            $len,
            $crate::callsite!(),
            stringify!($a),
            stringify!($b),
        )
    };
}
