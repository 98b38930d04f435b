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

//! Comparison operators for `SafeIntegral<T>`.
//!
//! A poisoned value is never equal to, less than or greater than anything,
//! not even itself. `==`, `<`, `<=`, `>` and `>=` therefore return `false`
//! whenever a poisoned operand is involved, while `!=`, being `!(==)`,
//! returns `true`. Callers rely on `x != y` to detect that an error
//! occurred, so this relation is deliberately not reflexive and the type
//! does not implement `Eq`, `Ord` or `Hash`.
//!
//! ```rust
//! # use bulwark_core::num::safe::SafeI32;
//! let p = SafeI32::poisoned();
//! assert!(!(p == p));
//! assert!(p != p);
//! assert!(!(p < SafeI32::new(1)) && !(p >= SafeI32::new(1)));
//! ```

use super::SafeIntegral;
use crate::num::integral::Integral;
use std::cmp::Ordering;

impl<T> PartialEq for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        !self.poisoned && !other.poisoned && self.value == other.value
    }
}

impl<T> PartialEq<T> for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        !self.poisoned && self.value == *other
    }
}

impl<T> PartialOrd for SafeIntegral<T>
where
    T: Integral,
{
    /// Returns `None` if either side is poisoned.
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.poisoned || other.poisoned {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

impl<T> PartialOrd<T> for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self.poisoned {
            return None;
        }
        Some(self.value.cmp(other))
    }
}

macro_rules! impl_primitive_lhs_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<SafeIntegral<$t>> for $t {
                #[inline(always)]
                fn eq(&self, other: &SafeIntegral<$t>) -> bool {
                    other == self
                }
            }

            impl PartialOrd<SafeIntegral<$t>> for $t {
                #[inline(always)]
                fn partial_cmp(&self, other: &SafeIntegral<$t>) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

impl_primitive_lhs_cmp!(i8, i16, i32, i64, i128, isize);
impl_primitive_lhs_cmp!(u8, u16, u32, u64, u128, usize);
