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

/// Axis selector for per-axis layout storage.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width = 0,
    Height = 1,
}

impl Dimension {
    /// Returns the canonical lowercase name of this axis.
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

impl Ordinal for Dimension {
    const ORDINAL_COUNT: u32 = 2;

    #[inline]
    fn ordinal(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_ordinal(ord: u32) -> Option<Self> {
        match ord {
            0 => Some(Dimension::Width),
            1 => Some(Dimension::Height),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
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
        assert_eq!(Dimension::ORDINAL_COUNT, 2);
        assert_eq!(Dimension::BIT_WIDTH, 1);
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(Dimension::from_ordinal(0), Some(Dimension::Width));
        assert_eq!(Dimension::from_ordinal(1), Some(Dimension::Height));
        assert_eq!(Dimension::from_ordinal(2), None);
        assert_eq!(Dimension::Height.ordinal(), 1);
    }

    #[test]
    fn test_ordinals_walk() {
        let axes: Vec<Dimension> = ordinals().collect();
        assert_eq!(axes, [Dimension::Width, Dimension::Height]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::Width.to_string(), "width");
        assert_eq!(Dimension::Height.to_string(), "height");
    }
}
