// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Platform status codes.
//!
//! Kernel services report their outcome as a [`KStatus`] word. Zero is the
//! success sentinel. Codes with the high bit set are errors; nonzero codes
//! without it are warnings, which callers must not treat as errors.

#![cfg_attr(not(test), no_std)]

use core::fmt;

/// A platform status code.
///
/// The raw word layout follows the platform convention: `0` is success,
/// the high bit marks errors, and the remaining nonzero codes are
/// warnings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KStatus(usize);

impl KStatus {
    const ERROR_BIT: usize = 1 << (usize::BITS - 1);

    /// The operation completed successfully.
    pub const SUCCESS: KStatus = KStatus(0);

    /// The operation completed, but the returned data may be stale.
    pub const WARN_STALE_DATA: KStatus = KStatus(1);
    /// The operation completed, but the output was truncated.
    pub const WARN_TRUNCATED: KStatus = KStatus(2);

    /// A parameter was outside its valid range.
    pub const INVALID_PARAMETER: KStatus = KStatus(Self::ERROR_BIT | 1);
    /// The request is not supported by this implementation.
    pub const UNSUPPORTED: KStatus = KStatus(Self::ERROR_BIT | 2);
    /// The service is not ready to handle the request.
    pub const NOT_READY: KStatus = KStatus(Self::ERROR_BIT | 3);
    /// The underlying device reported a hardware error.
    pub const DEVICE_ERROR: KStatus = KStatus(Self::ERROR_BIT | 4);
    /// A required resource could not be allocated.
    pub const OUT_OF_RESOURCES: KStatus = KStatus(Self::ERROR_BIT | 5);
    /// The requested item was not found.
    pub const NOT_FOUND: KStatus = KStatus(Self::ERROR_BIT | 6);
    /// The caller lacks the rights for the request.
    pub const ACCESS_DENIED: KStatus = KStatus(Self::ERROR_BIT | 7);
    /// The operation did not complete in time.
    pub const TIMEOUT: KStatus = KStatus(Self::ERROR_BIT | 8);
    /// The operation was aborted before it could complete.
    pub const ABORTED: KStatus = KStatus(Self::ERROR_BIT | 9);

    /// Builds a status from its raw word.
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        KStatus(raw)
    }

    /// Returns the raw status word.
    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Returns `true` for the success sentinel.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for error codes.
    ///
    /// Warnings are nonzero but do not carry the error bit, so they are
    /// not errors.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 & Self::ERROR_BIT != 0
    }

    /// Returns `true` for warning codes.
    #[inline]
    pub const fn is_warning(self) -> bool {
        !self.is_success() && !self.is_error()
    }

    /// Symbolic name of a known code.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            KStatus::SUCCESS => "Success",
            KStatus::WARN_STALE_DATA => "Warning: Stale Data",
            KStatus::WARN_TRUNCATED => "Warning: Truncated",
            KStatus::INVALID_PARAMETER => "Invalid Parameter",
            KStatus::UNSUPPORTED => "Unsupported",
            KStatus::NOT_READY => "Not Ready",
            KStatus::DEVICE_ERROR => "Device Error",
            KStatus::OUT_OF_RESOURCES => "Out of Resources",
            KStatus::NOT_FOUND => "Not Found",
            KStatus::ACCESS_DENIED => "Access Denied",
            KStatus::TIMEOUT => "Timeout",
            KStatus::ABORTED => "Aborted",
            _ => return None,
        })
    }
}

impl fmt::Display for KStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Status {:#x}", self.0),
        }
    }
}

impl fmt::Debug for KStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "KStatus({name})"),
            None => write!(f, "KStatus({:#x})", self.0),
        }
    }
}
