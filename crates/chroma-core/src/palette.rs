//! The fixed 4-color palette mapping bit-pairs to colors and back.
//!
//! The inverse lookup uses exact value equality. Rendered tags are compared
//! against the palette constants themselves, not perceptually; anything else
//! is a decode failure.

use crate::error::ChromaError;
use crate::grid::BitPair;

/// An 8-bit RGB color with value-equality semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Monochrome foreground.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Monochrome background.
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub(crate) const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Palette entry for bit-pair (0, 0).
pub const ORANGE: Rgb = Rgb::new(255, 125, 42);
/// Palette entry for bit-pair (0, 1).
pub const MAGENTA: Rgb = Rgb::new(200, 114, 239);
/// Palette entry for bit-pair (1, 0).
pub const LIME: Rgb = Rgb::new(82, 255, 0);
/// Palette entry for bit-pair (1, 1).
pub const TEAL: Rgb = Rgb::new(25, 255, 255);

/// A bijective table of 4 pairwise-distinct colors indexed by bit-pair.
///
/// Table order is fixed: entry 0 maps (0,0), entry 1 maps (0,1), entry 2
/// maps (1,0), entry 3 maps (1,1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: [Rgb; 4],
}

/// The process-wide reference palette, with the colors of the original
/// ChromaTag generator.
pub const CHROMA_PALETTE: Palette = Palette::new([ORANGE, MAGENTA, LIME, TEAL]);

impl Palette {
    /// Build a palette from 4 colors in table order.
    ///
    /// The colors must be pairwise distinct for the inverse mapping to be
    /// well-defined; that is the caller's contract here. Use
    /// [`Palette::try_new`] to have it checked.
    #[must_use]
    pub const fn new(colors: [Rgb; 4]) -> Self {
        Self { colors }
    }

    /// Build a palette, rejecting duplicate colors.
    ///
    /// # Errors
    /// [`ChromaError::DuplicatePaletteColor`] if any two entries are equal.
    pub fn try_new(colors: [Rgb; 4]) -> Result<Self, ChromaError> {
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                if colors[i] == colors[j] {
                    return Err(ChromaError::DuplicatePaletteColor);
                }
            }
        }
        Ok(Self { colors })
    }

    /// The 4 colors in table order.
    #[must_use]
    pub const fn colors(&self) -> &[Rgb; 4] {
        &self.colors
    }

    /// Forward mapping. Total: every representable pair has an entry.
    #[must_use]
    pub fn color_for(&self, pair: BitPair) -> Rgb {
        self.colors[pair.index()]
    }

    /// Inverse mapping, defined only over the 4 palette colors.
    ///
    /// # Errors
    /// [`ChromaError::UnrecognizedColor`] for any other color value.
    pub fn pair_for(&self, color: Rgb) -> Result<BitPair, ChromaError> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(BitPair::from_index)
            .ok_or(ChromaError::UnrecognizedColor(color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        CHROMA_PALETTE
    }
}

/// The 2-color mapping for the plain (non-redundant) reference rendering:
/// 1 renders black, everything else white. Independent of the 4-color
/// palette.
#[must_use]
pub const fn bit_to_monochrome(bit: bool) -> Rgb {
    if bit {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_order_matches_pair_encoding() {
        assert_eq!(CHROMA_PALETTE.color_for(BitPair::new(false, false)), ORANGE);
        assert_eq!(CHROMA_PALETTE.color_for(BitPair::new(false, true)), MAGENTA);
        assert_eq!(CHROMA_PALETTE.color_for(BitPair::new(true, false)), LIME);
        assert_eq!(CHROMA_PALETTE.color_for(BitPair::new(true, true)), TEAL);
    }

    #[test]
    fn forward_then_inverse_is_identity() {
        for index in 0..4 {
            let pair = BitPair::from_index(index);
            let color = CHROMA_PALETTE.color_for(pair);
            assert_eq!(CHROMA_PALETTE.pair_for(color), Ok(pair));
        }
    }

    #[test]
    fn duplicate_colors_rejected() {
        let result = Palette::try_new([ORANGE, MAGENTA, ORANGE, TEAL]);
        assert_eq!(result, Err(ChromaError::DuplicatePaletteColor));
        assert!(Palette::try_new(*CHROMA_PALETTE.colors()).is_ok());
    }

    #[test]
    fn monochrome_mapping() {
        assert_eq!(bit_to_monochrome(true), Rgb::BLACK);
        assert_eq!(bit_to_monochrome(false), Rgb::WHITE);
    }

    proptest! {
        #[test]
        fn foreign_colors_are_rejected(r: u8, g: u8, b: u8) {
            let color = Rgb::new(r, g, b);
            prop_assume!(!CHROMA_PALETTE.colors().contains(&color));
            prop_assert_eq!(
                CHROMA_PALETTE.pair_for(color),
                Err(ChromaError::UnrecognizedColor(color))
            );
        }
    }
}
