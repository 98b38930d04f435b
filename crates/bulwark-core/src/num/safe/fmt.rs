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

//! Rendering for `SafeIntegral<T>`.
//!
//! All formatting goes through the effective value (`get()`), so a poisoned
//! value prints as `0` and never leaks its stale bit pattern. Formatter
//! flags (width, fill, `#`, `+`) are forwarded to the primitive.

use super::SafeIntegral;
use crate::num::integral::Integral;

macro_rules! forward_fmt {
    ($($fmt_trait:ident),*) => {
        $(
            impl<T> std::fmt::$fmt_trait for SafeIntegral<T>
            where
                T: Integral,
            {
                #[inline]
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::$fmt_trait::fmt(&self.get(), f)
                }
            }
        )*
    };
}

forward_fmt!(Display, LowerHex, UpperHex, Octal, Binary);

impl<T> std::fmt::Debug for SafeIntegral<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeIntegral")
            .field("value", &self.get())
            .field("poisoned", &self.poisoned)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::num::safe::{SafeI32, SafeU16, SafeU8};

    #[test]
    fn test_display_renders_value() {
        assert_eq!(format!("{}", SafeI32::new(-42)), "-42");
        assert_eq!(format!("{:>5}", SafeU8::new(7)), "    7");
        assert_eq!(format!("{:+}", SafeI32::new(3)), "+3");
    }

    #[test]
    fn test_display_renders_poisoned_as_zero() {
        assert_eq!(format!("{}", SafeI32::from_raw(-42, true)), "0");
        assert_eq!(format!("{:#x}", SafeU16::from_raw(0xbeef, true)), "0x0");
    }

    #[test]
    fn test_radix_formats() {
        let v = SafeU16::new(0xbeef);
        assert_eq!(format!("{:x}", v), "beef");
        assert_eq!(format!("{:X}", v), "BEEF");
        assert_eq!(format!("{:#x}", v), "0xbeef");
        assert_eq!(format!("{:o}", SafeU8::new(8)), "10");
        assert_eq!(format!("{:08b}", SafeU8::new(5)), "00000101");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", SafeI32::new(5)),
            "SafeIntegral { value: 5, poisoned: false }"
        );
        assert_eq!(
            format!("{:?}", SafeI32::from_raw(5, true)),
            "SafeIntegral { value: 0, poisoned: true }"
        );
    }
}
