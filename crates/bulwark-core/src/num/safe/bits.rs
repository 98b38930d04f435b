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

//! Bitwise and shift operators for unsigned `SafeIntegral<T>`.
//!
//! The bit operation is always carried out on the effective values (so a
//! poisoned operand contributes zero bits) and cannot overflow; the result
//! is poisoned iff either operand was. Signed instantiations do not get
//! these operators at all.
//!
//! Shifts take a `u32` count. A count at or beyond `T::BITS` poisons the
//! result instead of handing an out-of-range count to the native shift.

use super::SafeIntegral;
use crate::num::integral::UnsignedIntegral;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

macro_rules! impl_bit_op {
    ($($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt);* $(;)?) => {
        $(
            impl<T> $assign_trait for SafeIntegral<T>
            where
                T: UnsignedIntegral,
            {
                #[inline(always)]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = Self::from_raw(self.get() $op rhs.get(), self.poisoned || rhs.poisoned);
                }
            }

            impl<T> $assign_trait<T> for SafeIntegral<T>
            where
                T: UnsignedIntegral,
            {
                #[inline(always)]
                fn $assign_method(&mut self, rhs: T) {
                    <Self as $assign_trait>::$assign_method(self, Self::new(rhs));
                }
            }

            impl<T> $trait_name for SafeIntegral<T>
            where
                T: UnsignedIntegral,
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
                T: UnsignedIntegral,
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

impl_bit_op! {
    BitAnd, bitand, BitAndAssign, bitand_assign, &;
    BitOr, bitor, BitOrAssign, bitor_assign, |;
    BitXor, bitxor, BitXorAssign, bitxor_assign, ^;
}

macro_rules! impl_primitive_lhs_bits {
    ($($t:ty),*) => {
        $(
            impl_primitive_lhs_bits!(@op $t, BitAnd, bitand);
            impl_primitive_lhs_bits!(@op $t, BitOr, bitor);
            impl_primitive_lhs_bits!(@op $t, BitXor, bitxor);
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

impl_primitive_lhs_bits!(u8, u16, u32, u64, u128, usize);

impl<T> Not for SafeIntegral<T>
where
    T: UnsignedIntegral,
{
    type Output = Self;

    /// Flips every bit, computed as `MAX ^ self`.
    #[inline(always)]
    fn not(self) -> Self {
        Self::new(T::MAX_VALUE) ^ self
    }
}

impl<T> ShlAssign<u32> for SafeIntegral<T>
where
    T: UnsignedIntegral,
{
    #[inline(always)]
    fn shl_assign(&mut self, bits: u32) {
        match self.get().checked_shl_val(bits) {
            Some(value) => self.value = value,
            None => self.poisoned = true,
        }
    }
}

impl<T> ShrAssign<u32> for SafeIntegral<T>
where
    T: UnsignedIntegral,
{
    #[inline(always)]
    fn shr_assign(&mut self, bits: u32) {
        match self.get().checked_shr_val(bits) {
            Some(value) => self.value = value,
            None => self.poisoned = true,
        }
    }
}

impl<T> Shl<u32> for SafeIntegral<T>
where
    T: UnsignedIntegral,
{
    type Output = Self;

    #[inline(always)]
    fn shl(mut self, bits: u32) -> Self {
        self <<= bits;
        self
    }
}

impl<T> Shr<u32> for SafeIntegral<T>
where
    T: UnsignedIntegral,
{
    type Output = Self;

    #[inline(always)]
    fn shr(mut self, bits: u32) -> Self {
        self >>= bits;
        self
    }
}
