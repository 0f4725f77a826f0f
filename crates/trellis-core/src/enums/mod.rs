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

//! # Ordinal Enumerations
//!
//! Type-level facilities for sequential, zero-based enumerations. This module
//! consolidates the ordinal contract every style enumeration implements and
//! the concrete enumerations the layout pipeline stores in packed form.
//!
//! ## Submodules
//!
//! - `ordinal`: The [`ordinal::Ordinal`] trait (declared ordinal count,
//!   derived bit width, underlying-integer conversion), the const
//!   [`ordinal::bit_width`] helper, and the [`ordinal::ordinals`] walk over
//!   every value of an enumeration.
//! - `measure_mode`: [`measure_mode::MeasureMode`], the sizing constraint
//!   passed to measurement during layout.
//! - `dimension`: [`dimension::Dimension`], the horizontal/vertical axis
//!   selector used to index per-axis storage.
//!
//! ## Motivation
//!
//! Style storage keeps dozens of small enumeration fields; packing them into
//! bit fields sized exactly by their ordinal count keeps nodes compact. The
//! ordinal contract makes that width a per-type compile-time constant rather
//! than a hand-maintained magic number.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod dimension;
pub mod measure_mode;
pub mod ordinal;
