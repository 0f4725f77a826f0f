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

use std::fmt;

use crate::enums::ordinal::Ordinal;

/// Sizing constraint handed to measurement during layout.
///
/// `Undefined` leaves the axis unconstrained, `Exactly` pins it to the given
/// available size, and `AtMost` caps it.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    #[default]
    Undefined = 0,
    Exactly = 1,
    AtMost = 2,
}

impl MeasureMode {
    /// Returns the canonical lowercase name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            MeasureMode::Undefined => "undefined",
            MeasureMode::Exactly => "exactly",
            MeasureMode::AtMost => "at-most",
        }
    }
}

impl Ordinal for MeasureMode {
    const ORDINAL_COUNT: u32 = 3;

    #[inline]
    fn ordinal(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_ordinal(ord: u32) -> Option<Self> {
        match ord {
            0 => Some(MeasureMode::Undefined),
            1 => Some(MeasureMode::Exactly),
            2 => Some(MeasureMode::AtMost),
            _ => None,
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ordinal::ordinals;

    #[test]
    fn test_ordinal_contract() {
        assert_eq!(MeasureMode::ORDINAL_COUNT, 3);
        assert_eq!(MeasureMode::BIT_WIDTH, 2);
        assert!(MeasureMode::HAS_ORDINALITY);
    }

    #[test]
    fn test_round_trip() {
        for k in 0..MeasureMode::ORDINAL_COUNT {
            assert_eq!(MeasureMode::from_ordinal(k).unwrap().ordinal(), k);
        }
        assert_eq!(MeasureMode::from_ordinal(3), None);
    }

    #[test]
    fn test_ordinals_walk() {
        let modes: Vec<MeasureMode> = ordinals().collect();
        assert_eq!(
            modes,
            [
                MeasureMode::Undefined,
                MeasureMode::Exactly,
                MeasureMode::AtMost
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MeasureMode::Undefined.to_string(), "undefined");
        assert_eq!(MeasureMode::Exactly.to_string(), "exactly");
        assert_eq!(MeasureMode::AtMost.to_string(), "at-most");
    }

    #[test]
    fn test_default_is_undefined() {
        assert_eq!(MeasureMode::default(), MeasureMode::Undefined);
    }
}
