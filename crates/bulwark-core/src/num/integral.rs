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

//! # Integral Parametrization
//!
//! The sealed trait family that fixes which primitive integers a
//! `SafeIntegral<T>` may wrap. `Integral` collects every capability the
//! arithmetic and comparison operators need; `SignedIntegral` and
//! `UnsignedIntegral` split the family so that negation and bit
//! manipulation are compile-time restrictions rather than runtime branches.

use crate::num::{
    constants::{Limits, MinusOne, PlusOne, Zero},
    ops::overflowing::{
        CheckedShlVal, CheckedShrVal, OverflowingAddVal, OverflowingMulVal, OverflowingSubVal,
    },
};
use num_traits::{PrimInt, Signed, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer that can back a `SafeIntegral<T>`.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `isize` and their
/// unsigned counterparts. The trait is sealed.
pub trait Integral:
    PrimInt
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + std::fmt::LowerHex
    + std::fmt::UpperHex
    + std::fmt::Octal
    + std::fmt::Binary
    + Send
    + Sync
    + 'static
    + Zero
    + PlusOne
    + Limits
    + OverflowingAddVal
    + OverflowingSubVal
    + OverflowingMulVal
    + sealed::Sealed
{
    /// Returns `true` if `self / divisor` (or `self % divisor`) cannot be
    /// evaluated by the native instruction: the divisor is zero, or the
    /// type is signed and the operands are `MIN` and `-1`.
    fn is_division_fault(self, divisor: Self) -> bool;
}

/// A signed `Integral`. Required for negation.
pub trait SignedIntegral: Integral + Signed + MinusOne {}

/// An unsigned `Integral`. Required for the bitwise and shift operators.
pub trait UnsignedIntegral: Integral + Unsigned + CheckedShlVal + CheckedShrVal {}

macro_rules! impl_integral {
    (signed: $($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                #[inline(always)]
                fn is_division_fault(self, divisor: Self) -> bool {
                    divisor == <$t as Zero>::ZERO
                        || (self == <$t>::MIN && divisor == <$t as MinusOne>::MINUS_ONE)
                }
            }

            impl SignedIntegral for $t {}
        )*
    };
    (unsigned: $($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                #[inline(always)]
                fn is_division_fault(self, divisor: Self) -> bool {
                    divisor == <$t as Zero>::ZERO
                }
            }

            impl UnsignedIntegral for $t {}
        )*
    };
}

impl_integral!(signed: i8, i16, i32, i64, i128, isize);
impl_integral!(unsigned: u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn faults<T: Integral>(lhs: T, rhs: T) -> bool {
        lhs.is_division_fault(rhs)
    }

    #[test]
    fn test_division_by_zero_is_a_fault() {
        assert!(faults(10i32, 0));
        assert!(faults(0u8, 0));
        assert!(faults(i64::MIN, 0));
    }

    #[test]
    fn test_signed_min_by_minus_one_is_a_fault() {
        assert!(faults(i8::MIN, -1));
        assert!(faults(i32::MIN, -1));
        assert!(faults(isize::MIN, -1));
        assert!(!faults(i32::MIN + 1, -1));
        assert!(!faults(i32::MIN, 1));
    }

    #[test]
    fn test_unsigned_max_by_all_ones_is_not_a_fault() {
        assert!(!faults(u8::MAX, u8::MAX));
        assert!(!faults(u32::MIN, 1));
    }
}
