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

//! # Ordinal Contract
//!
//! The [`Ordinal`] trait ties a sequential, zero-based enumeration to its
//! declared ordinal count and derives everything the storage layer needs
//! from it: the minimum bit width for packed fields, conversion to and from
//! the underlying integer, and a restartable forward walk over every value
//! via [`ordinals`].
//!
//! ## Highlights
//!
//! - `ORDINAL_COUNT` is supplied by the definer, never computed.
//! - `BIT_WIDTH` is a derived compile-time constant usable in array lengths
//!   and bit-field layout declarations.
//! - A zero ordinal count fails compilation at the first use of
//!   [`Ordinal::BIT_WIDTH`] or [`ordinals`], never at runtime.
//! - [`Ordinals`] implements `Iterator`, `ExactSizeIterator`, and
//!   `FusedIterator`, with cursor equality defined by the underlying
//!   ordinal.
//!
//! ## Usage
//!
//! ```rust
//! use trellis_core::enums::ordinal::{ordinals, Ordinal};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Corner {
//!     TopLeft,
//!     TopRight,
//!     BottomLeft,
//!     BottomRight,
//! }
//!
//! impl Ordinal for Corner {
//!     const ORDINAL_COUNT: u32 = 4;
//!
//!     fn ordinal(self) -> u32 {
//!         self as u32
//!     }
//!
//!     fn from_ordinal(ord: u32) -> Option<Self> {
//!         match ord {
//!             0 => Some(Corner::TopLeft),
//!             1 => Some(Corner::TopRight),
//!             2 => Some(Corner::BottomLeft),
//!             3 => Some(Corner::BottomRight),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Corner::BIT_WIDTH, 2);
//! assert_eq!(ordinals::<Corner>().count(), 4);
//! ```

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Returns the number of bits needed to represent `value` in unsigned form.
///
/// This is the usual bit-length definition: `0` needs zero bits, `1` needs
/// one, `2..=3` need two, and so on. Const-evaluable so it can size packed
/// storage in constant context.
///
/// # Examples
///
/// ```rust
/// # use trellis_core::enums::ordinal::bit_width;
///
/// assert_eq!(bit_width(0), 0);
/// assert_eq!(bit_width(1), 1);
/// assert_eq!(bit_width(3), 2);
/// assert_eq!(bit_width(255), 8);
/// assert_eq!(bit_width(256), 9);
/// ```
#[inline]
pub const fn bit_width(value: u32) -> u32 {
    let mut remaining = value;
    let mut width = 0;
    while remaining != 0 {
        remaining >>= 1;
        width += 1;
    }
    width
}

/// The contract for sequential, zero-based enumerations.
///
/// An implementing type declares how many distinct values it defines and how
/// each value maps to its zero-based ordinal. Everything else — the ordinality
/// gate, the packed-storage bit width, the [`ordinals`] walk — is derived from
/// that declaration.
///
/// # Correctness
///
/// Supplying a wrong [`Ordinal::ORDINAL_COUNT`] is a silent correctness bug:
/// the derived bit width and the iteration bound go wrong with no detection
/// mechanism beyond the greater-than-zero gate. The count must exactly match
/// the number of distinct, sequential, zero-based values the type defines,
/// and keeping it in sync when variants are added or removed is entirely the
/// definer's responsibility.
pub trait Ordinal: Copy {
    /// Number of distinct, sequential, zero-based values this type defines.
    ///
    /// Supplied by the definer, never computed. See the trait-level
    /// correctness note: a wrong count is silently wrong everywhere.
    const ORDINAL_COUNT: u32;

    /// Whether this type declares at least one ordinal.
    const HAS_ORDINALITY: bool = Self::ORDINAL_COUNT > 0;

    /// Compile-time gate: evaluating this constant for a type with a zero
    /// ordinal count is a compilation error.
    const ORDINALITY: () = assert!(
        Self::HAS_ORDINALITY,
        "type declares an ordinal count of zero"
    );

    /// Minimum number of bits able to represent every valid ordinal.
    ///
    /// Derived as the bit length of `ORDINAL_COUNT - 1`; a single-valued
    /// enumeration needs zero bits. Recomputed automatically whenever the
    /// declared count changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::enums::measure_mode::MeasureMode;
    /// use trellis_core::enums::ordinal::Ordinal;
    ///
    /// // Three modes fit in two bits.
    /// assert_eq!(MeasureMode::BIT_WIDTH, 2);
    /// ```
    const BIT_WIDTH: u32 = {
        let () = Self::ORDINALITY;
        bit_width(Self::ORDINAL_COUNT - 1)
    };

    /// Returns the underlying integer representation of `self`, unchanged.
    fn ordinal(self) -> u32;

    /// Returns the value whose ordinal is `ord`, or `None` if `ord` is not
    /// less than [`Ordinal::ORDINAL_COUNT`].
    ///
    /// Exact inverse of [`Ordinal::ordinal`] over the valid range:
    /// `E::from_ordinal(k).unwrap().ordinal() == k` for every `k` below the
    /// declared count.
    fn from_ordinal(ord: u32) -> Option<Self>;
}

/// Returns a lazy, finite walk over every value of `E` in ascending ordinal
/// order, from ordinal `0` through `ORDINAL_COUNT - 1`.
///
/// The walk is forward-only and restartable: cloning the iterator (or calling
/// this function again) replays the same sequence. Requesting it for a type
/// with a zero ordinal count fails at compile time.
///
/// # Examples
///
/// ```rust
/// use trellis_core::enums::measure_mode::MeasureMode;
/// use trellis_core::enums::ordinal::ordinals;
///
/// let modes: Vec<MeasureMode> = ordinals().collect();
/// assert_eq!(
///     modes,
///     [MeasureMode::Undefined, MeasureMode::Exactly, MeasureMode::AtMost]
/// );
/// ```
#[inline]
pub fn ordinals<E: Ordinal>() -> Ordinals<E> {
    let () = E::ORDINALITY;
    Ordinals {
        next: 0,
        _marker: PhantomData,
    }
}

/// Forward iterator over every value of an [`Ordinal`] enumeration.
///
/// Created by [`ordinals`]. Two cursors are equal iff their underlying
/// ordinals are equal.
#[derive(Debug)]
pub struct Ordinals<E> {
    next: u32,
    _marker: PhantomData<E>,
}

impl<E> Clone for Ordinals<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            _marker: PhantomData,
        }
    }
}

impl<E> PartialEq for Ordinals<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.next == other.next
    }
}

impl<E> Eq for Ordinals<E> {}

impl<E: Ordinal> Iterator for Ordinals<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        if self.next >= E::ORDINAL_COUNT {
            return None;
        }
        match E::from_ordinal(self.next) {
            Some(value) => {
                self.next += 1;
                Some(value)
            }
            // `from_ordinal` must cover the whole declared range; a hole
            // exhausts the walk.
            None => {
                self.next = E::ORDINAL_COUNT;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (E::ORDINAL_COUNT - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<E: Ordinal> ExactSizeIterator for Ordinals<E> {}

impl<E: Ordinal> FusedIterator for Ordinals<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Tri {
        A,
        B,
        C,
    }

    impl Ordinal for Tri {
        const ORDINAL_COUNT: u32 = 3;

        fn ordinal(self) -> u32 {
            self as u32
        }

        fn from_ordinal(ord: u32) -> Option<Self> {
            match ord {
                0 => Some(Tri::A),
                1 => Some(Tri::B),
                2 => Some(Tri::C),
                _ => None,
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Single {
        Only,
    }

    impl Ordinal for Single {
        const ORDINAL_COUNT: u32 = 1;

        fn ordinal(self) -> u32 {
            self as u32
        }

        fn from_ordinal(ord: u32) -> Option<Self> {
            match ord {
                0 => Some(Single::Only),
                _ => None,
            }
        }
    }

    // Registry-style implementer: the ordinal domain is keyed by type, not
    // restricted to language-level enums.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Byte(u8);

    impl Ordinal for Byte {
        const ORDINAL_COUNT: u32 = 256;

        fn ordinal(self) -> u32 {
            u32::from(self.0)
        }

        fn from_ordinal(ord: u32) -> Option<Self> {
            if ord < Self::ORDINAL_COUNT {
                Some(Byte(ord as u8))
            } else {
                None
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Wide(u16);

    impl Ordinal for Wide {
        const ORDINAL_COUNT: u32 = 257;

        fn ordinal(self) -> u32 {
            u32::from(self.0)
        }

        fn from_ordinal(ord: u32) -> Option<Self> {
            if ord < Self::ORDINAL_COUNT {
                Some(Wide(ord as u16))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_bit_width_fn() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(2), 2);
        assert_eq!(bit_width(3), 2);
        assert_eq!(bit_width(4), 3);
        assert_eq!(bit_width(7), 3);
        assert_eq!(bit_width(8), 4);
        assert_eq!(bit_width(255), 8);
        assert_eq!(bit_width(256), 9);
        assert_eq!(bit_width(u32::MAX), 32);
    }

    #[test]
    fn test_derived_bit_width_per_type() {
        // Smallest w with 2^w >= count.
        assert_eq!(Single::BIT_WIDTH, 0);
        assert_eq!(Tri::BIT_WIDTH, 2);
        assert_eq!(Byte::BIT_WIDTH, 8);
        assert_eq!(Wide::BIT_WIDTH, 9);
    }

    #[test]
    fn test_has_ordinality() {
        assert!(Tri::HAS_ORDINALITY);
        assert!(Single::HAS_ORDINALITY);
        assert!(Byte::HAS_ORDINALITY);
    }

    #[test]
    fn test_ordinals_yields_all_values_in_order() {
        let values: Vec<Tri> = ordinals().collect();
        assert_eq!(values, [Tri::A, Tri::B, Tri::C]);

        let underlying: Vec<u32> = ordinals::<Tri>().map(Tri::ordinal).collect();
        assert_eq!(underlying, [0, 1, 2]);
    }

    #[test]
    fn test_ordinals_is_replayable() {
        let first: Vec<Tri> = ordinals().collect();
        let second: Vec<Tri> = ordinals().collect();
        assert_eq!(first, second);

        // Cloning a partially advanced cursor replays the remainder.
        let mut iter = ordinals::<Tri>();
        iter.next();
        let rest: Vec<Tri> = iter.clone().collect();
        assert_eq!(rest, [Tri::B, Tri::C]);
        assert_eq!(iter.collect::<Vec<_>>(), [Tri::B, Tri::C]);
    }

    #[test]
    fn test_ordinals_exact_size() {
        let mut iter = ordinals::<Tri>();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.len(), 2);

        assert_eq!(ordinals::<Byte>().len(), 256);
    }

    #[test]
    fn test_ordinals_is_fused() {
        let mut iter = ordinals::<Single>();
        assert_eq!(iter.next(), Some(Single::Only));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_cursor_equality_tracks_ordinal() {
        let mut a = ordinals::<Tri>();
        let mut b = ordinals::<Tri>();
        assert_eq!(a, b);

        a.next();
        assert_ne!(a, b);

        b.next();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordinal_round_trip() {
        for k in 0..Tri::ORDINAL_COUNT {
            let value = Tri::from_ordinal(k).unwrap();
            assert_eq!(value.ordinal(), k);
        }
        assert_eq!(Tri::from_ordinal(3), None);
        assert_eq!(Byte::from_ordinal(256), None);
        assert_eq!(Wide::from_ordinal(256), Some(Wide(256)));
    }
}
