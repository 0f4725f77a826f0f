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
//! Floating-point semantics for optional layout quantities. This module
//! consolidates the NaN-sentinel convention every style and layout field
//! follows: the NaN bit pattern, and only that pattern, means "value not
//! set".
//!
//! ## Submodules
//!
//! - `sentinel`: The [`sentinel::SentinelFloat`] trait binding `f32`/`f64`
//!   to their sentinel and tolerance constants, the defined-aware
//!   classification and min/max combinators, and the
//!   [`sentinel::InexactEquals`] trait for scalar and element-wise
//!   tolerance comparison.
//!
//! ## Motivation
//!
//! Layout math mixes set and unset quantities constantly ("the larger of two
//! lengths, where an unset length loses"). Encoding absence in the value
//! itself keeps per-axis storage to a bare float, and the combinators keep
//! the unset-handling rules in one place instead of scattered branches.
//!
//! Refer to the submodule for detailed APIs and examples.

pub mod sentinel;
