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

//! Arithmetic operators for `SafeIntegral<T>`.
//!
//! Every binary operator is defined as copy-then-compound-assign, so the
//! compound forms below hold all of the overflow and poison logic.

use super::SafeIntegral;
use crate::num::integral::{Integral, SignedIntegral};
use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

impl<T> SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn apply_overflowing(&mut self, rhs: Self, op: fn(T, T) -> (T, bool)) {
        let (value, overflowed) = op(self.value, rhs.value);
        self.value = value;
        self.poisoned = self.poisoned || rhs.poisoned || overflowed;
    }

    /// The native division is only reached once neither operand is
    /// poisoned and the operands are not a division fault.
    #[inline(always)]
    fn apply_division(&mut self, rhs: Self, op: fn(T, T) -> T) {
        if self.poisoned || rhs.poisoned || self.value.is_division_fault(rhs.value) {
            self.poisoned = true;
            return;
        }
        self.value = op(self.value, rhs.value);
    }

    /// Adds one in place, poisoning on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeU8;
    /// let mut v = SafeU8::new(254);
    /// v.increment();
    /// assert_eq!(v.get(), 255);
    /// v.increment();
    /// assert!(v.is_poisoned());
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += T::PLUS_ONE;
        self
    }

    /// Subtracts one in place, poisoning on underflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeI8;
    /// let mut v = SafeI8::new(-127);
    /// v.decrement();
    /// assert_eq!(v.get(), -128);
    /// assert!(v.decrement().is_poisoned());
    /// ```
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= T::PLUS_ONE;
        self
    }
}

impl<T> AddAssign for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.apply_overflowing(rhs, T::overflowing_add_val);
    }
}

impl<T> SubAssign for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.apply_overflowing(rhs, T::overflowing_sub_val);
    }
}

impl<T> MulAssign for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.apply_overflowing(rhs, T::overflowing_mul_val);
    }
}

impl<T> DivAssign for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        self.apply_division(rhs, |lhs, rhs| lhs / rhs);
    }
}

impl<T> RemAssign for SafeIntegral<T>
where
    T: Integral,
{
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        self.apply_division(rhs, |lhs, rhs| lhs % rhs);
    }
}

macro_rules! impl_arith_op {
    ($($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident);* $(;)?) => {
        $(
            impl<T> $assign_trait<T> for SafeIntegral<T>
            where
                T: Integral,
            {
                #[inline(always)]
                fn $assign_method(&mut self, rhs: T) {
                    <Self as $assign_trait>::$assign_method(self, Self::new(rhs));
                }
            }

            impl<T> $trait_name for SafeIntegral<T>
            where
                T: Integral,
            {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    let mut tmp = self;
                    <Self as $assign_trait>::$assign_method(&mut tmp, rhs);
                    tmp
                }
            }

            impl<T> $trait_name<T> for SafeIntegral<T>
            where
                T: Integral,
            {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: T) -> Self {
                    <Self as $trait_name>::$method(self, Self::new(rhs))
                }
            }
        )*
    };
}

impl_arith_op! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

// `raw op safe` needs one impl per primitive: the orphan rules forbid a
// blanket `impl<T> Add<SafeIntegral<T>> for T`.
macro_rules! impl_primitive_lhs_arith {
    ($($t:ty),*) => {
        $(
            impl_primitive_lhs_arith!(@op $t, Add, add);
            impl_primitive_lhs_arith!(@op $t, Sub, sub);
            impl_primitive_lhs_arith!(@op $t, Mul, mul);
            impl_primitive_lhs_arith!(@op $t, Div, div);
            impl_primitive_lhs_arith!(@op $t, Rem, rem);
        )*
    };
    (@op $t:ty, $trait_name:ident, $method:ident) => {
        impl $trait_name<SafeIntegral<$t>> for $t {
            type Output = SafeIntegral<$t>;

            #[inline(always)]
            fn $method(self, rhs: SafeIntegral<$t>) -> SafeIntegral<$t> {
                <SafeIntegral<$t> as $trait_name>::$method(SafeIntegral::new(self), rhs)
            }
        }
    };
}

impl_primitive_lhs_arith!(i8, i16, i32, i64, i128, isize);
impl_primitive_lhs_arith!(u8, u16, u32, u64, u128, usize);

impl<T> Neg for SafeIntegral<T>
where
    T: SignedIntegral,
{
    type Output = Self;

    /// Computes `0 - self`, so negating `MIN` poisons.
    #[inline(always)]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<T> Sum for SafeIntegral<T>
where
    T: Integral,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a, T> Sum<&'a SafeIntegral<T>> for SafeIntegral<T>
where
    T: Integral,
{
    fn sum<I: Iterator<Item = &'a SafeIntegral<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

impl<T> Product for SafeIntegral<T>
where
    T: Integral,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, v| acc * v)
    }
}

impl<'a, T> Product<&'a SafeIntegral<T>> for SafeIntegral<T>
where
    T: Integral,
{
    fn product<I: Iterator<Item = &'a SafeIntegral<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, v| acc * *v)
    }
}

#[cfg(test)]
mod tests {
    use crate::num::safe::{
        SafeI128, SafeI16, SafeI32, SafeI64, SafeI8, SafeIntegral, SafeIsize, SafeU16, SafeU32,
        SafeU64, SafeU8, SafeUsize,
    };
    use proptest::prelude::*;

    #[test]
    fn test_add_overflow_is_exact_for_i8() {
        assert!((SafeI8::new(127) + SafeI8::new(1)).is_poisoned());
        assert!((SafeI8::new(127) + SafeI8::new(0)).is_ok());
        assert_eq!((SafeI8::new(127) + SafeI8::new(0)).get(), 127);
        assert!((SafeI8::new(-128) - SafeI8::new(1)).is_poisoned());
        assert!((SafeI8::new(-128) + SafeI8::new(-1)).is_poisoned());
        assert_eq!((SafeI8::new(-100) + SafeI8::new(-28)).get(), -128);
    }

    #[test]
    fn test_unsigned_wrap_poisons() {
        assert!((SafeU8::new(255) + 1).is_poisoned());
        assert!((SafeU8::new(0) - 1).is_poisoned());
        assert!((SafeU16::new(256) * 256).is_poisoned());
        assert_eq!((SafeU16::new(255) * 257).get(), u16::MAX);
        assert!((SafeUsize::new(usize::MAX) + SafeUsize::one()).is_poisoned());
    }

    #[test]
    fn test_mul_signed_edges() {
        assert!((SafeI32::new(i32::MIN) * -1).is_poisoned());
        assert!((SafeI64::new(i64::MAX) * 2).is_poisoned());
        assert_eq!((SafeI64::new(i64::MIN / 2) * 2).get(), i64::MIN);
        assert_eq!((SafeI16::new(-12) * -12).get(), 144);
    }

    #[test]
    fn test_poisoned_result_reads_zero() {
        let r = SafeU32::new(u32::MAX) + 10;
        assert!(r.is_poisoned());
        assert_eq!(r.get(), 0);
        assert!(r.is_zero());
    }

    #[test]
    fn test_divide_by_zero() {
        let r = SafeI32::new(10) / SafeI32::new(0);
        assert!(r.is_poisoned());
        assert_eq!(r.get(), 0);

        let r = SafeU64::new(10) % 0;
        assert!(r.is_poisoned());
        assert_eq!(r.get(), 0);
    }

    #[test]
    fn test_signed_division_overflow() {
        assert!((SafeI32::new(i32::MIN) / SafeI32::new(-1)).is_poisoned());
        assert!((SafeI32::new(i32::MIN) % SafeI32::new(-1)).is_poisoned());
        assert!((SafeI8::new(i8::MIN) / -1).is_poisoned());
        assert!((SafeI128::new(i128::MIN) % -1).is_poisoned());
        assert_eq!((SafeI32::new(i32::MIN) / 1).get(), i32::MIN);
        assert_eq!((SafeI32::new(i32::MIN + 1) / -1).get(), i32::MAX);
    }

    #[test]
    fn test_division_truncates_like_native() {
        assert_eq!((SafeI32::new(-7) / 2).get(), -3);
        assert_eq!((SafeI32::new(-7) % 2).get(), -1);
        assert_eq!((SafeU8::new(200) / 7).get(), 28);
        assert_eq!((SafeU8::new(200) % 7).get(), 4);
    }

    #[test]
    fn test_division_does_not_run_on_poisoned_operands() {
        let mut v = SafeI32::from_raw(10, true);
        v /= 2;
        assert!(v.is_poisoned());

        let mut w = SafeI32::new(10);
        w %= SafeI32::from_raw(3, true);
        assert!(w.is_poisoned());
        assert_eq!(w.get(), 0);
    }

    #[test]
    fn test_raw_operand_forms() {
        let a = SafeI32::new(40);
        assert_eq!((a + 2).get(), 42);
        assert_eq!((2i32 + a).get(), 42);
        assert_eq!((a - 2).get(), 38);
        assert_eq!((50i32 - a).get(), 10);
        assert_eq!((a * 2).get(), 80);
        assert_eq!((3i32 * a).get(), 120);
        assert_eq!((a / 8).get(), 5);
        assert_eq!((400i32 / a).get(), 10);
        assert_eq!((a % 7).get(), 5);
        assert_eq!((45i32 % a).get(), 5);
        assert!((1i32 / SafeI32::zero()).is_poisoned());
        assert!((u8::MAX + SafeU8::one()).is_poisoned());
    }

    #[test]
    fn test_binary_forms_do_not_mutate_inputs() {
        let a = SafeU8::new(200);
        let b = SafeU8::new(100);
        let c = a + b;
        assert!(c.is_poisoned());
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(a.get(), 200);
        assert_eq!(b.get(), 100);
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = SafeI64::new(10);
        v += 5;
        v -= SafeI64::new(3);
        v *= 4;
        v /= SafeI64::new(6);
        v %= 5;
        assert_eq!(v.get(), 3);
        assert!(v.is_ok());
    }

    #[test]
    fn test_compound_assignment_keeps_poison() {
        let mut v = SafeU32::new(u32::MAX);
        v += 1;
        assert!(v.is_poisoned());
        v -= 1;
        assert!(v.is_poisoned());
        v *= 0;
        assert!(v.is_poisoned());
        v /= 1;
        assert!(v.is_poisoned());
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = SafeIsize::new(0);
        v.increment().increment();
        assert_eq!(v.get(), 2);
        v.decrement();
        assert_eq!(v.get(), 1);

        let mut top = SafeU16::new(u16::MAX);
        assert!(top.increment().is_poisoned());

        let mut bottom = SafeU16::new(0);
        assert!(bottom.decrement().is_poisoned());
        // A poisoned counter stays poisoned even when it would come back in range.
        bottom.increment();
        assert!(bottom.is_poisoned());
    }

    #[test]
    fn test_negation() {
        assert_eq!((-SafeI32::new(5)).get(), -5);
        assert_eq!((-SafeI32::new(-5)).get(), 5);
        assert_eq!((-SafeI32::new(0)).get(), 0);
        assert!((-SafeI32::new(i32::MIN)).is_poisoned());
        assert!((-SafeI8::new(i8::MIN)).is_poisoned());
        assert!((-SafeI8::from_raw(3, true)).is_poisoned());
    }

    #[test]
    fn test_sum_and_product() {
        let sizes = [SafeUsize::new(4), SafeUsize::new(8), SafeUsize::new(16)];
        let total: SafeUsize = sizes.iter().sum();
        assert_eq!(total.get(), 28);
        let area: SafeUsize = sizes.into_iter().product();
        assert_eq!(area.get(), 512);

        let wrapped: SafeU8 = [SafeU8::new(200), SafeU8::new(56)].into_iter().sum();
        assert!(wrapped.is_poisoned());

        let empty: SafeI32 = std::iter::empty::<SafeI32>().product();
        assert_eq!(empty.get(), 1);
    }

    fn all_ops<T: crate::num::integral::Integral>(
        a: SafeIntegral<T>,
        b: SafeIntegral<T>,
    ) -> [SafeIntegral<T>; 5] {
        [a + b, a - b, a * b, a / b, a % b]
    }

    proptest! {
        #[test]
        fn prop_closure_i32(a in any::<i32>(), b in any::<i32>(), pa in any::<bool>(), pb in any::<bool>()) {
            prop_assume!(pa || pb);
            for r in all_ops(SafeI32::from_raw(a, pa), SafeI32::from_raw(b, pb)) {
                prop_assert!(r.is_poisoned());
                prop_assert_eq!(r.get(), 0);
            }
        }

        #[test]
        fn prop_closure_u8(a in any::<u8>(), b in any::<u8>(), pa in any::<bool>(), pb in any::<bool>()) {
            prop_assume!(pa || pb);
            for r in all_ops(SafeU8::from_raw(a, pa), SafeU8::from_raw(b, pb)) {
                prop_assert!(r.is_poisoned());
            }
        }

        #[test]
        fn prop_matches_checked_primitives_i16(a in any::<i16>(), b in any::<i16>()) {
            let (x, y) = (SafeI16::new(a), SafeI16::new(b));
            prop_assert_eq!((x + y).ok(), a.checked_add(b));
            prop_assert_eq!((x - y).ok(), a.checked_sub(b));
            prop_assert_eq!((x * y).ok(), a.checked_mul(b));
            prop_assert_eq!((x / y).ok(), a.checked_div(b));
            prop_assert_eq!((x % y).ok(), a.checked_rem(b));
        }

        #[test]
        fn prop_matches_checked_primitives_u64(a in any::<u64>(), b in any::<u64>()) {
            let (x, y) = (SafeU64::new(a), SafeU64::new(b));
            prop_assert_eq!((x + y).ok(), a.checked_add(b));
            prop_assert_eq!((x - y).ok(), a.checked_sub(b));
            prop_assert_eq!((x * y).ok(), a.checked_mul(b));
            prop_assert_eq!((x / y).ok(), a.checked_div(b));
            prop_assert_eq!((x % y).ok(), a.checked_rem(b));
        }
    }
}
