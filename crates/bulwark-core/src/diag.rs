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

//! # Diagnostics
//!
//! Opt-in checkpoints that report failures through `tracing`. The operators
//! themselves never log; callers place a checkpoint where they want a
//! poisoned value or a failing error code to become visible.
//!
//! Events are emitted under the targets `bulwark::safe` and
//! `bulwark::errc`. Without the `tracing` feature every checkpoint is a
//! no-op that returns its input.

use crate::errc::ErrorCode;
use crate::num::{integral::Integral, safe::SafeIntegral};

impl<T> SafeIntegral<T>
where
    T: Integral,
{
    /// Emits a warning if the value is poisoned and returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::safe::SafeU32;
    /// let len = (SafeU32::new(u32::MAX) + 1).checkpoint("buffer length");
    /// assert!(len.is_poisoned());
    /// ```
    #[inline]
    pub fn checkpoint(self, context: &str) -> Self {
        if self.is_poisoned() {
            poisoned_event::<T>(context);
        }
        self
    }
}

impl ErrorCode {
    /// Emits an error event for failure codes, a trace event for success,
    /// and returns the code unchanged.
    #[inline]
    pub fn report(self, context: &str) -> Self {
        errc_event(self, context);
        self
    }
}

#[cfg(feature = "tracing")]
#[cold]
fn poisoned_event<T>(context: &str)
where
    T: Integral,
{
    tracing::warn!(
        target: "bulwark::safe",
        context,
        signed = T::IS_SIGNED,
        bits = T::BITS,
        "safe integral poisoned"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn poisoned_event<T>(_context: &str)
where
    T: Integral,
{
}

#[cfg(feature = "tracing")]
fn errc_event(errc: ErrorCode, context: &str) {
    if errc.failure() {
        tracing::error!(
            target: "bulwark::errc",
            context,
            code = errc.get(),
            "{}",
            errc
        );
    } else {
        tracing::trace!(target: "bulwark::errc", context, "success");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn errc_event(_errc: ErrorCode, _context: &str) {}
