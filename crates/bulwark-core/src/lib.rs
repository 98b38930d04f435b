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

//! # Bulwark Core
//!
//! Checked fixed-width integers for code that must not panic, abort or
//! silently wrap: kernels, hypervisors, allocators and other places where
//! sizes and counts feed into memory layout.
//!
//! The centerpiece is [`SafeIntegral<T>`](num::safe::SafeIntegral), an
//! integer paired with a sticky *poisoned* flag. Overflow, wrap, division
//! by zero and the signed `MIN / -1` case poison the value instead of
//! faulting; poison propagates through every later operation and a poisoned
//! value reads back as `0` until the caller decides to check it.
//!
//! ## Modules
//!
//! - `num`: the checked integral type, its operator families and the
//!   integer traits it is parametrized over (`Integral`, `SignedIntegral`,
//!   `UnsignedIntegral`), together with the constant and
//!   overflow-reporting primitive traits they are built from.
//! - `errc`: `PoisonedError` for `?`-style escalation and the value-typed
//!   `ErrorCode`.
//! - `diag`: `tracing` checkpoints for poisoned values and failing codes
//!   (enabled by the default `tracing` feature).
//!
//! ## Example
//!
//! ```rust
//! use bulwark_core::num::safe::SafeUsize;
//!
//! fn byte_len(count: usize, size: usize, header: usize) -> Option<usize> {
//!     (SafeUsize::new(count) * size + header).ok()
//! }
//!
//! assert_eq!(byte_len(4, 16, 8), Some(72));
//! assert_eq!(byte_len(usize::MAX, 2, 0), None);
//! ```

pub mod diag;
pub mod errc;
pub mod num;
