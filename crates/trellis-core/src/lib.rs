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

//! # Trellis Core
//!
//! Foundational value and type primitives for the Trellis layout ecosystem.
//! This crate consolidates the two leaf facilities every higher-level style
//! and layout crate builds on: a compile-time ordinal domain for sequential
//! enumerations, and a NaN-sentinel model for optional floating-point
//! layout quantities.
//!
//! ## Modules
//!
//! - `enums`: The [`enums::ordinal::Ordinal`] trait assigning every
//!   sequential enumeration a declared ordinal count, a derived minimum
//!   bit width for bit-packed storage, underlying-integer conversion, and
//!   a restartable forward walk over all values via
//!   [`enums::ordinal::ordinals`]. Concrete style enumerations such as
//!   [`enums::measure_mode::MeasureMode`] live here as well.
//! - `num`: The [`num::sentinel::SentinelFloat`] trait marking NaN as the
//!   canonical "value not set" representation for `f32`/`f64` layout
//!   quantities, with defined-preferring min/max combinators and
//!   fixed-epsilon inexact equality, scalar and element-wise.
//!
//! ## Purpose
//!
//! Style storage packs enumeration fields into bit fields sized by
//! `Ordinal::BIT_WIDTH`, and layout math routes every read of an optional
//! quantity through the sentinel combinators instead of comparing against
//! zero. Both facilities are pure, stateless, and safe to evaluate from any
//! number of threads without coordination.
//!
//! Refer to each module for detailed APIs and examples.

pub mod enums;
pub mod num;
