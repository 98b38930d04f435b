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

//! # Numeric Foundations
//!
//! The checked integral type and the integer traits underneath it.
//!
//! ## Submodules
//!
//! - `constants`: associated-constant traits (`MinusOne`, `Zero`,
//!   `PlusOne`, `Limits`) usable from `const fn` bodies.
//! - `ops`: by-value primitive operations that report overflow
//!   (`OverflowingAddVal`, ...) or reject out-of-range shift counts.
//! - `integral`: the sealed `Integral` family that parametrizes
//!   `SafeIntegral<T>` over width and signedness.
//! - `safe`: `SafeIntegral<T>` and its aliases (`SafeI32`, `SafeUsize`, ...).

pub mod constants;
pub mod integral;
pub mod ops;
pub mod safe;
