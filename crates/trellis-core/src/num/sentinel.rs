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

//! # NaN-Sentinel Floats
//!
//! Optional floating-point layout quantities encoded in the value itself:
//! the IEEE-754 NaN bit pattern, and only that pattern, means "value not
//! set". No wrapper type, no stored flag — sentinel-ness is a property
//! checked at read time.
//!
//! ## Highlights
//!
//! - [`SentinelFloat`] binds each precision to its sentinel
//!   ([`SentinelFloat::UNDEFINED`]) and its fixed comparison tolerance
//!   ([`SentinelFloat::INEXACT_EPSILON`], `0.0001` typed per precision).
//! - [`is_undefined`] detects the sentinel by self-inequality, the one
//!   comparison property unique to NaN under IEEE-754.
//! - [`max_or_defined`] and [`min_or_defined`] never let an unset operand
//!   win against a set one.
//! - [`InexactEquals`] extends tolerance comparison element-wise over
//!   fixed-size arrays, with statically matching lengths.
//!
//! ## Usage
//!
//! ```rust
//! use trellis_core::num::sentinel::{is_defined, max_or_defined, SentinelFloat};
//!
//! let unset = f32::UNDEFINED;
//! assert!(!is_defined(unset));
//!
//! // An unset length loses against any set one.
//! assert_eq!(max_or_defined(unset, 5.0), 5.0);
//! ```

use num_traits::Float;

/// A floating-point representation that reserves NaN as its "value not set"
/// sentinel.
///
/// Implemented for `f32` and `f64`. The tolerance constant is textually
/// `0.0001` in each precision; it is never promoted or truncated across
/// precisions.
pub trait SentinelFloat: Float {
    /// The canonical "value not set" sentinel for this precision.
    const UNDEFINED: Self;

    /// Fixed absolute tolerance used by [`inexact_equals`].
    const INEXACT_EPSILON: Self;
}

macro_rules! impl_sentinel_float {
    ($t:ty) => {
        impl SentinelFloat for $t {
            const UNDEFINED: Self = <$t>::NAN;
            const INEXACT_EPSILON: Self = 0.0001;
        }

        impl InexactEquals for $t {
            #[inline]
            fn inexact_equals(&self, other: &Self) -> bool {
                inexact_equals(*self, *other)
            }
        }
    };
}

impl_sentinel_float!(f32);
impl_sentinel_float!(f64);

/// Returns `true` iff `value` holds the "value not set" sentinel.
///
/// Detection is by self-inequality: a NaN is the only float that compares
/// unequal to itself under IEEE-754, regardless of signaling/quiet class or
/// payload bits.
///
/// # Examples
///
/// ```rust
/// # use trellis_core::num::sentinel::is_undefined;
///
/// assert!(is_undefined(f32::NAN));
/// assert!(!is_undefined(0.0_f32));
/// assert!(!is_undefined(f64::INFINITY));
/// ```
#[inline]
#[allow(clippy::eq_op)]
pub fn is_undefined<T: SentinelFloat>(value: T) -> bool {
    value != value
}

/// Returns `true` iff `value` holds an actual quantity (finite or infinite).
#[inline]
pub fn is_defined<T: SentinelFloat>(value: T) -> bool {
    !is_undefined(value)
}

/// Returns `true` iff `value` is exactly positive or negative infinity.
#[inline]
pub fn is_infinite<T: SentinelFloat>(value: T) -> bool {
    value == T::infinity() || value == T::neg_infinity()
}

/// Returns the greater of two quantities, preferring the defined one.
///
/// If both are defined the greater wins (the first argument on ties); if
/// exactly one is undefined the other is returned; if both are undefined the
/// second argument is returned as-is, bit pattern included. Callers rely on
/// that positional tie-break for determinism.
///
/// # Examples
///
/// ```rust
/// use trellis_core::num::sentinel::max_or_defined;
///
/// assert_eq!(max_or_defined(3.0_f32, 5.0), 5.0);
/// assert_eq!(max_or_defined(f32::NAN, 5.0), 5.0);
/// assert_eq!(max_or_defined(5.0_f32, f32::NAN), 5.0);
/// assert!(max_or_defined(f32::NAN, f32::NAN).is_nan());
/// ```
#[inline]
pub fn max_or_defined<T: SentinelFloat>(a: T, b: T) -> T {
    if is_defined(a) && is_defined(b) {
        if b > a {
            b
        } else {
            a
        }
    } else if is_undefined(a) {
        b
    } else {
        a
    }
}

/// Returns the lesser of two quantities, preferring the defined one.
///
/// Same undefined rules as [`max_or_defined`], with "lesser" in place of
/// "greater": both defined takes the lesser (the first argument on ties),
/// and both undefined returns the second argument.
#[inline]
pub fn min_or_defined<T: SentinelFloat>(a: T, b: T) -> T {
    if is_defined(a) && is_defined(b) {
        if b < a {
            b
        } else {
            a
        }
    } else if is_undefined(a) {
        b
    } else {
        a
    }
}

/// Compares two quantities with the fixed per-precision tolerance.
///
/// Both defined: `true` iff the absolute difference is strictly below
/// [`SentinelFloat::INEXACT_EPSILON`]. Both undefined: `true` — two "value
/// not set" sentinels are equal. Mixed: `false`.
///
/// # Examples
///
/// ```rust
/// # use trellis_core::num::sentinel::inexact_equals;
///
/// assert!(inexact_equals(1.00005_f32, 1.0));
/// assert!(!inexact_equals(1.001_f32, 1.0));
/// assert!(inexact_equals(f32::NAN, f32::NAN));
/// assert!(!inexact_equals(f32::NAN, 1.0));
/// ```
#[inline]
pub fn inexact_equals<T: SentinelFloat>(a: T, b: T) -> bool {
    if is_defined(a) && is_defined(b) {
        return (a - b).abs() < T::INEXACT_EPSILON;
    }
    is_undefined(a) && is_undefined(b)
}

/// Tolerance comparison over a value and its aggregates.
///
/// Scalars delegate to [`inexact_equals`]; fixed-size arrays compare
/// element-wise and short-circuit to `false` on the first mismatching pair.
/// Array lengths are part of the type, so differing sizes never meet.
///
/// # Examples
///
/// ```rust
/// use trellis_core::num::sentinel::InexactEquals;
///
/// let measured = [100.00005_f32, f32::NAN];
/// let cached = [100.0_f32, f32::NAN];
/// assert!(measured.inexact_equals(&cached));
/// assert!(![1.0_f32, 2.0].inexact_equals(&[1.0, 3.0]));
/// ```
pub trait InexactEquals {
    /// Returns `true` iff `self` and `other` match within the fixed
    /// tolerance.
    fn inexact_equals(&self, other: &Self) -> bool;
}

impl<T: InexactEquals, const N: usize> InexactEquals for [T; N] {
    #[inline]
    fn inexact_equals(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.inexact_equals(b))
    }
}
