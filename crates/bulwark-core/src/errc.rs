// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Error Codes
//!
//! Escalation types for callers that need more than the in-band poison
//! flag of `SafeIntegral<T>`.
//!
//! - `PoisonedError`: returned by `SafeIntegral::into_result`, so a
//!   poisoned computation can be propagated with `?`.
//! - `ErrorCode`: a small value-typed status code. Zero is success,
//!   positive codes are unchecked failures and negative codes are checked
//!   (caller-defined, expected) failures. The well-known codes are provided
//!   as associated constants with human-readable messages.
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_core::errc::ErrorCode;
//! use bulwark_core::num::safe::SafeU32;
//!
//! fn pages(bytes: u32) -> ErrorCode {
//!     match (SafeU32::new(bytes) + 4095).into_result() {
//!         Ok(_) => ErrorCode::SUCCESS,
//!         Err(e) => e.into(),
//!     }
//! }
//!
//! assert!(pages(8192).success());
//! assert_eq!(pages(u32::MAX), ErrorCode::UNSIGNED_WRAP);
//! assert_eq!(pages(u32::MAX).message(), "unsigned wrap (assertion) failure");
//! ```

use crate::num::integral::Integral;

/// The error produced when a poisoned `SafeIntegral<T>` is escalated.
///
/// The variant records the signedness of `T`, which determines whether the
/// failure was a signed overflow/division fault or an unsigned wrap/division
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PoisonedError {
    /// A signed value overflowed, divided by zero, hit `MIN / -1` or was
    /// computed from a poisoned operand.
    #[error("signed safe integral is poisoned")]
    Signed,
    /// An unsigned value wrapped, divided by zero or was computed from a
    /// poisoned operand.
    #[error("unsigned safe integral is poisoned")]
    Unsigned,
}

impl PoisonedError {
    /// The error variant matching the signedness of `T`.
    #[inline]
    pub fn for_type<T>() -> Self
    where
        T: Integral,
    {
        if T::IS_SIGNED {
            Self::Signed
        } else {
            Self::Unsigned
        }
    }
}

/// A value-typed status code.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::errc::ErrorCode;
/// let errc = ErrorCode::DIVIDE_BY_ZERO;
/// assert!(errc.failure());
/// assert!(errc.is_unchecked());
/// assert_eq!(errc.to_string(), "divide by zero (assertion) failure");
///
/// let custom = ErrorCode::new(-7);
/// assert!(custom.is_checked());
/// assert_eq!(custom.message(), "");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    pub const SUCCESS: Self = Self(0);
    pub const FAILURE: Self = Self(1);
    pub const PRECONDITION: Self = Self(2);
    pub const POSTCONDITION: Self = Self(3);
    pub const ASSERTION: Self = Self(4);
    pub const INVALID_ARGUMENT: Self = Self(10);
    pub const INDEX_OUT_OF_BOUNDS: Self = Self(11);
    pub const BAD_FUNCTION: Self = Self(12);
    pub const UNSIGNED_WRAP: Self = Self(30);
    pub const NARROW_OVERFLOW: Self = Self(31);
    pub const SIGNED_OVERFLOW: Self = Self(32);
    pub const DIVIDE_BY_ZERO: Self = Self(33);
    pub const NULLPTR_DEREFERENCE: Self = Self(34);

    /// Wraps a raw code.
    #[inline(always)]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[inline(always)]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns `true` if the code is `SUCCESS`.
    #[inline(always)]
    pub const fn success(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the code is anything but `SUCCESS`.
    #[inline(always)]
    pub const fn failure(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` for checked failures (negative codes).
    #[inline(always)]
    pub const fn is_checked(self) -> bool {
        self.0 < 0
    }

    /// Returns `true` for unchecked failures (positive codes).
    #[inline(always)]
    pub const fn is_unchecked(self) -> bool {
        self.0 > 0
    }

    /// A human-readable description of the well-known codes.
    ///
    /// Unknown codes yield an empty string.
    pub const fn message(self) -> &'static str {
        match self.0 {
            0 => "success",
            1 => "general failure",
            2 => "general precondition failure",
            3 => "general postcondition failure",
            4 => "general assertion failure",
            10 => "invalid argument (precondition) failure",
            11 => "index out of bounds (precondition) failure",
            12 => "function not callable (precondition) failure",
            30 => "unsigned wrap (assertion) failure",
            31 => "narrow overflow (assertion) failure",
            32 => "signed overflow (assertion) failure",
            33 => "divide by zero (assertion) failure",
            34 => "null dereference (assertion) failure",
            _ => "",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            "" => write!(f, "unknown error code {}", self.0),
            msg => f.write_str(msg),
        }
    }
}

impl From<ErrorCode> for bool {
    /// `true` if the code is `SUCCESS`.
    #[inline(always)]
    fn from(errc: ErrorCode) -> Self {
        errc.success()
    }
}

impl From<PoisonedError> for ErrorCode {
    #[inline]
    fn from(err: PoisonedError) -> Self {
        match err {
            PoisonedError::Signed => Self::SIGNED_OVERFLOW,
            PoisonedError::Unsigned => Self::UNSIGNED_WRAP,
        }
    }
}
