//! Error types for grid construction, palette lookup, and rendering.

use crate::palette::Rgb;

/// Errors reported by the encoding pipeline.
///
/// The only recoverable error on the pure data path is
/// [`ChromaError::UnrecognizedColor`]: a raster that was not produced by the
/// reference palette cannot be decoded and must be reported, never defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChromaError {
    /// Input rows do not all share the width of the first row.
    #[error("row {row} has {found} cells, expected {expected} (jagged input)")]
    JaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A cell value outside the binary domain.
    #[error("cell ({row}, {col}) holds {value}, bits must be 0 or 1")]
    InvalidBit {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },

    /// A color that is not one of the 4 palette entries.
    #[error("color {0:?} is not part of the palette")]
    UnrecognizedColor(Rgb),

    /// Palette construction with non-distinct colors; the inverse mapping
    /// would be ambiguous.
    #[error("palette colors must be pairwise distinct")]
    DuplicatePaletteColor,

    /// A render or read requested with `scale == 0`.
    #[error("scale must be a positive pixel count")]
    InvalidScale,

    /// Raster dimensions that are not a whole number of cells.
    #[error("image dimensions {width}x{height} are not a multiple of scale {scale}")]
    MisalignedImage {
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
        /// Requested cell size in pixels.
        scale: u32,
    },
}
