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

//! # Integer Constants
//!
//! Associated-constant traits for the sentinel values the checked integral
//! type needs in generic code. Unlike `num_traits::Zero::zero()` these are
//! `const` items, so they can be read from `const fn` bodies.

/// A trait for integer types that have a constant representing -1.
///
/// Only implemented for signed integers.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// Native representable bounds and layout facts of an integer type.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::constants::Limits;
/// assert_eq!(<i8 as Limits>::MIN_VALUE, -128);
/// assert_eq!(<u16 as Limits>::MAX_VALUE, 65_535);
/// assert!(<i32 as Limits>::IS_SIGNED);
/// assert_eq!(<u64 as Limits>::BITS, 64);
/// ```
pub trait Limits {
    /// The smallest representable value.
    const MIN_VALUE: Self;
    /// The largest representable value.
    const MAX_VALUE: Self;
    /// Whether the type can represent negative values.
    const IS_SIGNED: bool;
    /// The width of the type in bits.
    const BITS: u32;
}

macro_rules! impl_constants_for {
    (signed: $($t:ty),*) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }
            impl_constants_for!(@common $t, true);
        )*
    };
    (unsigned: $($t:ty),*) => {
        $(
            impl_constants_for!(@common $t, false);
        )*
    };
    (@common $t:ty, $signed:expr) => {
        impl PlusOne for $t {
            const PLUS_ONE: Self = 1;
        }

        impl Zero for $t {
            const ZERO: Self = 0;
        }

        impl Limits for $t {
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
            const IS_SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;
        }
    };
}

impl_constants_for!(signed: i8, i16, i32, i64, i128, isize);
impl_constants_for!(unsigned: u8, u16, u32, u64, u128, usize);
