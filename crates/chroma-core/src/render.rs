//! Reference rasterization: expanding each grid cell into a solid square
//! block of pixels, and the reverse sampling path for validation.
//!
//! The renderer produces in-memory [`RgbImage`] buffers only; writing them
//! to disk is the harness's job.

use image::RgbImage;
use rayon::prelude::*;

use crate::encoder;
use crate::error::ChromaError;
use crate::grid::{BitGrid, ColorGrid, Grid};
use crate::palette::Rgb;

/// Default pixel edge length of one rendered cell.
pub const DEFAULT_SCALE: u32 = 100;

/// Rasterization settings.
///
/// # Example
/// ```
/// use chroma_core::render::RenderConfig;
///
/// let config = RenderConfig::builder().scale(10).build();
/// assert_eq!(config.scale, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Pixel edge length of one cell block. Must be positive.
    pub scale: u32,
    /// Canvas color. Only visible for the empty grid, where the raster has
    /// zero pixels anyway; kept for parity with the reference generator's
    /// white canvas.
    pub background: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            background: Rgb::WHITE,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for [`RenderConfig`].
#[derive(Default)]
pub struct RenderConfigBuilder {
    scale: Option<u32>,
    background: Option<Rgb>,
}

impl RenderConfigBuilder {
    /// Set the pixel edge length of one cell block.
    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the canvas color.
    #[must_use]
    pub fn background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    #[must_use]
    pub fn build(self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            scale: self.scale.unwrap_or(defaults.scale),
            background: self.background.unwrap_or(defaults.background),
        }
    }
}

/// Rasterize a color grid. Cell `(i, j)` becomes a solid `scale` x `scale`
/// block at pixel offset `(j * scale, i * scale)`; the raster measures
/// `(width * scale, height * scale)` pixels. Deterministic, and
/// parallelized over pixel rows (cells are independent).
///
/// # Errors
/// [`ChromaError::InvalidScale`] if `config.scale` is zero.
pub fn render_colors(grid: &ColorGrid, config: &RenderConfig) -> Result<RgbImage, ChromaError> {
    if config.scale == 0 {
        return Err(ChromaError::InvalidScale);
    }
    let _span = tracing::debug_span!(
        "render_colors",
        width = grid.width(),
        height = grid.height(),
        scale = config.scale
    )
    .entered();

    let scale = config.scale as usize;
    let px_width = grid.width() * scale;
    let px_height = grid.height() * scale;
    let bg = config.background.channels();
    let mut img = RgbImage::from_pixel(px_width as u32, px_height as u32, image::Rgb(bg));
    if grid.is_empty() {
        return Ok(img);
    }

    let row_bytes = px_width * 3;
    let buf: &mut [u8] = &mut img;
    buf.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let grid_row = y / scale;
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                pixel.copy_from_slice(&grid.get(grid_row, x / scale).channels());
            }
        });
    Ok(img)
}

/// Rasterize the plain black-and-white reference rendering of a tag.
///
/// # Errors
/// [`ChromaError::InvalidScale`] if `config.scale` is zero.
pub fn render_bits(grid: &BitGrid, config: &RenderConfig) -> Result<RgbImage, ChromaError> {
    render_colors(&encoder::monochrome(grid), config)
}

/// Read a rendered raster back into a color grid by sampling the center
/// pixel of each `scale` x `scale` block. The reverse of [`render_colors`],
/// used for round-trip validation.
///
/// # Errors
/// [`ChromaError::InvalidScale`] if `scale` is zero,
/// [`ChromaError::MisalignedImage`] if the raster dimensions are not whole
/// multiples of `scale`.
pub fn read_colors(img: &RgbImage, scale: u32) -> Result<ColorGrid, ChromaError> {
    if scale == 0 {
        return Err(ChromaError::InvalidScale);
    }
    let (width, height) = img.dimensions();
    if width % scale != 0 || height % scale != 0 {
        return Err(ChromaError::MisalignedImage {
            width,
            height,
            scale,
        });
    }
    let _span = tracing::debug_span!("read_colors", width, height, scale).entered();

    Ok(Grid::from_fn(
        (height / scale) as usize,
        (width / scale) as usize,
        |row, col| {
            let px = img.get_pixel(
                col as u32 * scale + scale / 2,
                row as u32 * scale + scale / 2,
            );
            Rgb::new(px[0], px[1], px[2])
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CHROMA_PALETTE, ORANGE, TEAL};

    #[test]
    fn raster_size_invariant() {
        let grid = Grid::from_fn(3, 3, |_, _| ORANGE);
        let img = render_colors(&grid, &RenderConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (300, 300));

        let config = RenderConfig::builder().scale(7).build();
        let img = render_colors(&grid, &config).unwrap();
        assert_eq!(img.dimensions(), (21, 21));
    }

    #[test]
    fn non_square_raster_size() {
        let grid = Grid::from_fn(2, 5, |_, _| TEAL);
        let config = RenderConfig::builder().scale(4).build();
        let img = render_colors(&grid, &config).unwrap();
        assert_eq!(img.dimensions(), (20, 8));
    }

    #[test]
    fn blocks_are_uniform() {
        let grid = Grid::from_fn(2, 2, |row, col| if row == col { TEAL } else { ORANGE });
        let config = RenderConfig::builder().scale(3).build();
        let img = render_colors(&grid, &config).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                let expected = if (y / 3) == (x / 3) { TEAL } else { ORANGE };
                let px = img.get_pixel(x, y);
                assert_eq!(Rgb::new(px[0], px[1], px[2]), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_scale_is_rejected() {
        let grid = Grid::from_fn(1, 1, |_, _| ORANGE);
        let config = RenderConfig::builder().scale(0).build();
        assert_eq!(render_colors(&grid, &config), Err(ChromaError::InvalidScale));
        assert_eq!(
            read_colors(&RgbImage::new(4, 4), 0),
            Err(ChromaError::InvalidScale)
        );
    }

    #[test]
    fn misaligned_raster_is_rejected() {
        let img = RgbImage::new(10, 9);
        assert_eq!(
            read_colors(&img, 4),
            Err(ChromaError::MisalignedImage {
                width: 10,
                height: 9,
                scale: 4,
            })
        );
    }

    #[test]
    fn empty_grid_renders_to_empty_raster() {
        let img = render_colors(&Grid::empty(), &RenderConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (0, 0));
        assert_eq!(read_colors(&img, 100).unwrap(), Grid::empty());
    }

    #[test]
    fn render_then_read_round_trips() {
        let tag = BitGrid::from_bits(&[[0u8, 1, 1], [1, 1, 1], [0, 1, 0]]).unwrap();
        let pairs = crate::encoder::encode(&tag);
        let colors = crate::encoder::apply_palette(&pairs, &CHROMA_PALETTE);
        let config = RenderConfig::builder().scale(5).build();
        let img = render_colors(&colors, &config).unwrap();
        assert_eq!(read_colors(&img, config.scale).unwrap(), colors);
    }

    #[test]
    fn monochrome_rendering_uses_black_and_white() {
        let tag = BitGrid::from_bits(&[[1u8, 0]]).unwrap();
        let config = RenderConfig::builder().scale(2).build();
        let img = render_bits(&tag, &config).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(2, 0).0, [255, 255, 255]);
    }
}
