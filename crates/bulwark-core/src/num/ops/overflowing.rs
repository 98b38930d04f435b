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

//! # Overflow-Reporting Operations
//!
//! By-value traits that perform a primitive integer operation and report
//! whether it overflowed, in a single fused step. They are thin shims over
//! the inherent `overflowing_*` and `checked_sh*` methods so the checked
//! integral type can stay generic over every width.

/// Addition that reports wraparound alongside the wrapped result.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::overflowing::OverflowingAddVal;
/// assert_eq!(127i8.overflowing_add_val(1), (-128, true));
/// assert_eq!(100u8.overflowing_add_val(55), (155, false));
/// ```
pub trait OverflowingAddVal: Sized {
    /// Returns the wrapped sum and `true` if the addition overflowed.
    fn overflowing_add_val(self, rhs: Self) -> (Self, bool);
}

/// Subtraction that reports wraparound alongside the wrapped result.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::overflowing::OverflowingSubVal;
/// assert_eq!(0u8.overflowing_sub_val(1), (255, true));
/// assert_eq!((-128i8).overflowing_sub_val(1), (127, true));
/// assert_eq!(10i32.overflowing_sub_val(3), (7, false));
/// ```
pub trait OverflowingSubVal: Sized {
    /// Returns the wrapped difference and `true` if the subtraction overflowed.
    fn overflowing_sub_val(self, rhs: Self) -> (Self, bool);
}

/// Multiplication that reports wraparound alongside the wrapped result.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::overflowing::OverflowingMulVal;
/// assert_eq!(16u8.overflowing_mul_val(16), (0, true));
/// assert_eq!(15u8.overflowing_mul_val(17), (255, false));
/// ```
pub trait OverflowingMulVal: Sized {
    /// Returns the wrapped product and `true` if the multiplication overflowed.
    fn overflowing_mul_val(self, rhs: Self) -> (Self, bool);
}

/// Left shift that refuses shift counts at or beyond the bit width.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::overflowing::CheckedShlVal;
/// assert_eq!(1u8.checked_shl_val(7), Some(128));
/// assert_eq!(1u8.checked_shl_val(8), None);
/// ```
pub trait CheckedShlVal: Sized {
    /// Shifts left by `rhs`, returning `None` if `rhs >= Self::BITS`.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// Right shift that refuses shift counts at or beyond the bit width.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::overflowing::CheckedShrVal;
/// assert_eq!(0x80u8.checked_shr_val(7), Some(1));
/// assert_eq!(0x80u8.checked_shr_val(8), None);
/// ```
pub trait CheckedShrVal: Sized {
    /// Shifts right by `rhs`, returning `None` if `rhs >= Self::BITS`.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

macro_rules! overflowing_impl_val {
    ($($t:ty),*) => {
        $(
            impl OverflowingAddVal for $t {
                #[inline(always)]
                fn overflowing_add_val(self, rhs: $t) -> ($t, bool) {
                    <$t>::overflowing_add(self, rhs)
                }
            }

            impl OverflowingSubVal for $t {
                #[inline(always)]
                fn overflowing_sub_val(self, rhs: $t) -> ($t, bool) {
                    <$t>::overflowing_sub(self, rhs)
                }
            }

            impl OverflowingMulVal for $t {
                #[inline(always)]
                fn overflowing_mul_val(self, rhs: $t) -> ($t, bool) {
                    <$t>::overflowing_mul(self, rhs)
                }
            }

            impl CheckedShlVal for $t {
                #[inline(always)]
                fn checked_shl_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shl(self, rhs)
                }
            }

            impl CheckedShrVal for $t {
                #[inline(always)]
                fn checked_shr_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shr(self, rhs)
                }
            }
        )*
    };
}

overflowing_impl_val!(u8, u16, u32, u64, u128, usize);
overflowing_impl_val!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reports_signed_and_unsigned_wrap() {
        assert_eq!(i8::MAX.overflowing_add_val(1), (i8::MIN, true));
        assert_eq!(i8::MAX.overflowing_add_val(0), (i8::MAX, false));
        assert_eq!(u64::MAX.overflowing_add_val(1), (0, true));
        assert_eq!(i32::MIN.overflowing_add_val(-1), (i32::MAX, true));
    }

    #[test]
    fn test_sub_reports_underflow() {
        assert_eq!(0usize.overflowing_sub_val(1), (usize::MAX, true));
        assert_eq!(i16::MIN.overflowing_sub_val(1), (i16::MAX, true));
        assert_eq!(5u16.overflowing_sub_val(5), (0, false));
    }

    #[test]
    fn test_mul_reports_overflow() {
        assert_eq!(i8::MIN.overflowing_mul_val(-1), (i8::MIN, true));
        assert_eq!(0x1_0000u32.overflowing_mul_val(0x1_0000), (0, true));
        assert_eq!((-4i64).overflowing_mul_val(5), (-20, false));
    }

    #[test]
    fn test_shift_counts_are_bounded_by_width() {
        assert_eq!(1u32.checked_shl_val(31), Some(1 << 31));
        assert_eq!(1u32.checked_shl_val(32), None);
        assert_eq!(u128::MAX.checked_shr_val(127), Some(1));
        assert_eq!(u128::MAX.checked_shr_val(128), None);
    }
}
