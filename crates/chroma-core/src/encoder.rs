//! The ChromaTag transform: pairing each cell with its point-reflected
//! counterpart, and the inverse path from rendered colors back to pairs.

use crate::error::ChromaError;
use crate::grid::{BitGrid, BitPair, ColorGrid, Grid, PairGrid};
use crate::palette::{bit_to_monochrome, Palette};

/// Encode a binary tag by pairing every cell `(i, j)` with the bit at its
/// 180-degree-rotated position `(H-1-i, W-1-j)`.
///
/// The mirror lookup uses the input grid's original dimensions for every
/// cell, including non-square grids. Output dimensions equal input
/// dimensions; the empty grid encodes to the empty grid. Never fails.
#[must_use]
pub fn encode(bits: &BitGrid) -> PairGrid {
    let height = bits.height();
    let width = bits.width();
    Grid::from_fn(height, width, |row, col| {
        BitPair::new(
            bits.get(row, col),
            bits.get(height - 1 - row, width - 1 - col),
        )
    })
}

/// Map an encoded pair grid to palette colors. Total: every pair has a
/// palette entry.
#[must_use]
pub fn apply_palette(pairs: &PairGrid, palette: &Palette) -> ColorGrid {
    Grid::from_fn(pairs.height(), pairs.width(), |row, col| {
        palette.color_for(pairs.get(row, col))
    })
}

/// The plain black-and-white rendering of the original tag (1 is black,
/// 0 is white), independent of the 4-color palette.
#[must_use]
pub fn monochrome(bits: &BitGrid) -> ColorGrid {
    Grid::from_fn(bits.height(), bits.width(), |row, col| {
        bit_to_monochrome(bits.get(row, col))
    })
}

/// Decode a grid of rendered colors back into bit-pairs by exact palette
/// lookup. The reverse path of [`apply_palette`], used for round-trip
/// validation.
///
/// The empty grid decodes to the empty grid.
///
/// # Errors
/// [`ChromaError::UnrecognizedColor`] for any cell whose color is not one
/// of the 4 palette constants. No cell is ever defaulted.
pub fn decode_colors(colors: &ColorGrid, palette: &Palette) -> Result<PairGrid, ChromaError> {
    let _span = tracing::debug_span!(
        "decode_colors",
        width = colors.width(),
        height = colors.height()
    )
    .entered();

    let mut data = Vec::with_capacity(colors.height() * colors.width());
    for row in 0..colors.height() {
        for col in 0..colors.width() {
            data.push(palette.pair_for(colors.get(row, col))?);
        }
    }
    Ok(Grid::from_raw(data, colors.width(), colors.height()))
}
