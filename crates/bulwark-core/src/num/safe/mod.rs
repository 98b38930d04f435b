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

//! # Safe Integral
//!
//! `SafeIntegral<T>` pairs a fixed-width integer with a sticky *poisoned*
//! flag. Overflow, wrap, division by zero and the signed `MIN / -1` case
//! never panic and never produce a garbage value; they poison the result
//! instead, and every operation that sees a poisoned operand produces a
//! poisoned result. A poisoned value always reads back as `0`.
//!
//! The flag is discovered whenever the caller chooses, through
//! `is_poisoned`, `is_ok`, `into_result` or a `bool` conversion.
//!
//! ## Layout
//!
//! The type is `#[repr(C)]` and `Copy`. Its default, and its all-zero bit
//! pattern, is an unpoisoned zero, so instances can live in `static` items
//! built from the `const fn` constructors without any startup code.
//!
//! ## Submodules
//!
//! - `arith`: `+ - * / %`, compound assignment, increment/decrement,
//!   negation for signed types, `Sum` and `Product`.
//! - `cmp`: `PartialEq`/`PartialOrd` where poisoned values compare as
//!   neither equal, less nor greater to anything.
//! - `bits`: `& | ^ ! << >>` for unsigned types only.
//! - `fmt`: rendering of the effective value.
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_core::num::safe::SafeI32;
//!
//! let val1 = SafeI32::new(4);
//! let val2 = SafeI32::new(8);
//! let val3 = SafeI32::new(15);
//! let val4 = SafeI32::new(16);
//! let val5 = SafeI32::new(23);
//! let val6 = SafeI32::new(42);
//!
//! let answer = ((((val1 / val2) + val3) % val4) * val5) - val6;
//! assert!(answer.is_ok());
//! assert_eq!(answer.get(), 303);
//!
//! let broken = answer / SafeI32::zero();
//! assert!(broken.is_poisoned());
//! assert_eq!(broken.get(), 0);
//! ```

mod arith;
mod bits;
mod cmp;
mod fmt;

use crate::errc::PoisonedError;
use crate::num::integral::Integral;

/// A fixed-width integer carrying a sticky poison flag.
///
/// See the [module documentation](self) for the semantics.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct SafeIntegral<T> {
    value: T,
    poisoned: bool,
}

impl<T> SafeIntegral<T> {
    /// Creates an unpoisoned value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeIntegral;
    /// const LIMIT: SafeIntegral<u32> = SafeIntegral::new(4096);
    /// assert_eq!(LIMIT.get(), 4096);
    /// assert!(LIMIT.is_ok());
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            poisoned: false,
        }
    }

    /// Creates a value with an explicit poison state.
    ///
    /// Used to hand back an already failed value without re-deriving the
    /// failure, e.g. from a factory whose precondition did not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeIntegral;
    /// let failed = SafeIntegral::from_raw(42i64, true);
    /// assert!(failed.is_poisoned());
    /// assert_eq!(failed.get(), 0);
    /// ```
    #[inline(always)]
    pub const fn from_raw(value: T, poisoned: bool) -> Self {
        Self { value, poisoned }
    }

    /// Returns `true` if an operation producing this value failed.
    #[inline(always)]
    pub const fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Returns `true` if the value is not poisoned.
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        !self.poisoned
    }

    /// Poisons the value.
    ///
    /// For callers that detect a domain error the type cannot see itself.
    /// There is no way to clear the flag other than [`set`](Self::set) or
    /// constructing a fresh value.
    #[inline(always)]
    pub fn set_poisoned(&mut self) {
        self.poisoned = true;
    }
}

impl<T> SafeIntegral<T>
where
    T: Integral,
{
    /// An unpoisoned zero.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new(T::ZERO)
    }

    /// An unpoisoned one.
    #[inline(always)]
    pub const fn one() -> Self {
        Self::new(T::PLUS_ONE)
    }

    /// A poisoned zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeU8;
    /// let p = SafeU8::poisoned();
    /// assert!(p.is_poisoned());
    /// assert!(p.is_zero());
    /// ```
    #[inline(always)]
    pub const fn poisoned() -> Self {
        Self::from_raw(T::ZERO, true)
    }

    /// Returns the underlying integer, or `0` if the value is poisoned.
    ///
    /// This is the only way to read the payload; a poisoned bit pattern is
    /// never exposed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeI8;
    /// assert_eq!(SafeI8::new(-7).get(), -7);
    /// assert_eq!((SafeI8::new(127) + 1).get(), 0);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> T {
        if self.poisoned {
            T::ZERO
        } else {
            self.value
        }
    }

    /// Re-initializes the value from a raw integer, clearing the poison flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeU16;
    /// let mut v = SafeU16::poisoned();
    /// v.set(9);
    /// assert!(v.is_ok());
    /// assert_eq!(v.get(), 9);
    /// ```
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.poisoned = false;
    }

    /// Converts into a `Result`, so failures can be escalated with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`PoisonedError`] if the value is poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::errc::PoisonedError;
    /// # use bulwark_core::num::safe::SafeUsize;
    /// fn total(len: usize, stride: usize) -> Result<usize, PoisonedError> {
    ///     (SafeUsize::new(len) * stride).into_result()
    /// }
    ///
    /// assert_eq!(total(4, 8), Ok(32));
    /// assert_eq!(total(usize::MAX, 2), Err(PoisonedError::Unsigned));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, PoisonedError> {
        if self.poisoned {
            Err(PoisonedError::for_type::<T>())
        } else {
            Ok(self.value)
        }
    }

    /// Returns `Some(value)` if the value is not poisoned.
    #[inline]
    pub fn ok(self) -> Option<T> {
        if self.poisoned {
            None
        } else {
            Some(self.value)
        }
    }

    /// The smallest value `T` can represent.
    #[inline(always)]
    pub const fn min_value() -> T {
        T::MIN_VALUE
    }

    /// The largest value `T` can represent.
    #[inline(always)]
    pub const fn max_value() -> T {
        T::MAX_VALUE
    }

    /// Returns `true` if `T` is a signed integer.
    #[inline(always)]
    pub const fn is_signed_type() -> bool {
        T::IS_SIGNED
    }

    /// Returns `true` if `T` is an unsigned integer.
    #[inline(always)]
    pub const fn is_unsigned_type() -> bool {
        !T::IS_SIGNED
    }

    /// Returns `true` if the value is unpoisoned and equals `T`'s minimum.
    #[inline]
    pub fn is_min(&self) -> bool {
        !self.poisoned && self.value == T::MIN_VALUE
    }

    /// Returns `true` if the value is unpoisoned and equals `T`'s maximum.
    #[inline]
    pub fn is_max(&self) -> bool {
        !self.poisoned && self.value == T::MAX_VALUE
    }

    /// Returns `true` if the value is zero.
    ///
    /// A poisoned value reads back as zero, so this also returns `true` for
    /// poisoned values.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.poisoned || self.value == T::ZERO
    }

    /// Returns `true` if the value is unpoisoned and greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.poisoned && self.value > T::ZERO
    }

    /// Returns `true` if the value is unpoisoned and less than zero.
    ///
    /// Always `false` for unsigned types.
    #[inline]
    pub fn is_negative(&self) -> bool {
        T::IS_SIGNED && !self.poisoned && self.value < T::ZERO
    }

    /// Returns the smaller of `self` and `other`.
    ///
    /// If either operand is poisoned the result is a poisoned zero,
    /// regardless of magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeI32;
    /// assert_eq!(SafeI32::new(3).min_of(7).get(), 3);
    /// assert_eq!(SafeI32::new(3).min_of(SafeI32::new(-7)).get(), -7);
    /// assert!(SafeI32::new(3).min_of(SafeI32::poisoned()).is_poisoned());
    /// ```
    #[inline]
    pub fn min_of(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.poisoned || other.poisoned {
            return Self::poisoned();
        }
        Self::new(if other.value < self.value {
            other.value
        } else {
            self.value
        })
    }

    /// Returns the larger of `self` and `other`.
    ///
    /// If either operand is poisoned the result is a poisoned zero,
    /// regardless of magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeU64;
    /// assert_eq!(SafeU64::new(3).max_of(7).get(), 7);
    /// assert!(SafeU64::poisoned().max_of(7).is_poisoned());
    /// ```
    #[inline]
    pub fn max_of(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.poisoned || other.poisoned {
            return Self::poisoned();
        }
        Self::new(if self.value < other.value {
            other.value
        } else {
            self.value
        })
    }
}

impl<T> From<T> for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<SafeIntegral<T>> for bool {
    /// `true` if the value is not poisoned.
    #[inline(always)]
    fn from(value: SafeIntegral<T>) -> Self {
        !value.poisoned
    }
}

pub type SafeI8 = SafeIntegral<i8>;
pub type SafeI16 = SafeIntegral<i16>;
pub type SafeI32 = SafeIntegral<i32>;
pub type SafeI64 = SafeIntegral<i64>;
pub type SafeI128 = SafeIntegral<i128>;
/// Native word sized signed integral.
pub type SafeIsize = SafeIntegral<isize>;

pub type SafeU8 = SafeIntegral<u8>;
pub type SafeU16 = SafeIntegral<u16>;
pub type SafeU32 = SafeIntegral<u32>;
pub type SafeU64 = SafeIntegral<u64>;
pub type SafeU128 = SafeIntegral<u128>;
/// Native word sized unsigned integral.
pub type SafeUsize = SafeIntegral<usize>;
