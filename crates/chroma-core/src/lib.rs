//! Redundant color encoding for binary fiducial markers.
//!
//! A ChromaTag embeds an AprilTag-style binary pattern twice in a single
//! image: once in its normal orientation and once rotated 180 degrees, with
//! both copies folded into a 4-color raster. A detector can then
//! cross-validate a decoded tag against its own point-symmetric twin when
//! part of the pattern is occluded or misread.
//!
//! # Pipeline
//!
//! 1. **Transform** ([`encoder::encode`]): every cell `(i, j)` of the binary
//!    grid is paired with the bit at its point-reflected position
//!    `(H-1-i, W-1-j)`.
//! 2. **Palette** ([`palette::Palette`]): the 4 possible bit-pairs map
//!    bijectively onto 4 fixed colors.
//! 3. **Raster** ([`render::render_colors`]): each cell becomes a solid
//!    square block of pixels at a configurable scale.
//!
//! The reverse path ([`render::read_colors`] then
//! [`encoder::decode_colors`]) exists for round-trip validation. Camera-side
//! detection, perspective correction, and sensor color calibration are out
//! of scope.
//!
//! # Example
//!
//! ```
//! use chroma_core::grid::BitGrid;
//! use chroma_core::palette::CHROMA_PALETTE;
//! use chroma_core::render::RenderConfig;
//! use chroma_core::{encoder, render};
//!
//! let tag = BitGrid::from_bits(&[[1u8, 0], [0, 1]])?;
//! let pairs = encoder::encode(&tag);
//! let colors = encoder::apply_palette(&pairs, &CHROMA_PALETTE);
//!
//! let image = render::render_colors(&colors, &RenderConfig::default())?;
//! assert_eq!(image.dimensions(), (200, 200));
//!
//! // Reverse path reproduces the encoding exactly.
//! let read_back = render::read_colors(&image, 100)?;
//! assert_eq!(encoder::decode_colors(&read_back, &CHROMA_PALETTE)?, pairs);
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```

/// Sample 36h11 tag patterns used as fixtures.
pub mod dictionaries;
/// The forward transform and the color-decoding reverse path.
pub mod encoder;
/// Error types.
pub mod error;
/// Rectangular grid types for bits, bit-pairs, and colors.
pub mod grid;
/// The 4-color bit-pair codec and the monochrome mapping.
pub mod palette;
/// Fixed-scale rasterization and the sampling reverse path.
pub mod render;

pub use crate::error::ChromaError;
pub use crate::grid::{BitGrid, BitPair, ColorGrid, Grid, PairGrid};
pub use crate::palette::{Palette, Rgb, CHROMA_PALETTE};
pub use crate::render::RenderConfig;

use image::RgbImage;

/// Render the ChromaTag image of a binary tag: encode, apply the palette,
/// rasterize.
///
/// # Errors
/// [`ChromaError::InvalidScale`] if the configured scale is zero.
pub fn chroma_image(
    bits: &BitGrid,
    palette: &Palette,
    config: &RenderConfig,
) -> Result<RgbImage, ChromaError> {
    let pairs = encoder::encode(bits);
    let colors = encoder::apply_palette(&pairs, palette);
    render::render_colors(&colors, config)
}

/// Render the plain black-and-white reference image of a binary tag.
///
/// # Errors
/// [`ChromaError::InvalidScale`] if the configured scale is zero.
pub fn april_image(bits: &BitGrid, config: &RenderConfig) -> Result<RgbImage, ChromaError> {
    render::render_bits(bits, config)
}
