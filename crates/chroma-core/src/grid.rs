//! Owned rectangular grids for bits, bit-pairs, and colors.
//!
//! Every stage of the pipeline is a pure function from one grid to the next,
//! so grids own their cells (flat row-major storage with explicit
//! dimensions) and are never mutated after construction.

use std::fmt;

use crate::error::ChromaError;
use crate::palette::Rgb;

/// An ordered (original, mirrored) pair of bits.
///
/// `bit` is the cell's own value; `mirror` is the value of its
/// point-reflected counterpart at `(H-1-i, W-1-j)`. Carrying bits as `bool`
/// makes the palette mapping total: there is no representable pair outside
/// the 4-entry table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitPair {
    /// The cell's own bit.
    pub bit: bool,
    /// The bit at the point-reflected position.
    pub mirror: bool,
}

impl BitPair {
    /// Pair an original bit with its mirrored counterpart.
    #[must_use]
    pub const fn new(bit: bool, mirror: bool) -> Self {
        Self { bit, mirror }
    }

    /// True when both components agree, i.e. the pair has form `(b, b)`.
    /// Every cell of an encoded point-symmetric tag is uniform.
    #[must_use]
    pub const fn is_uniform(self) -> bool {
        self.bit == self.mirror
    }

    /// Palette index in table order: (0,0) -> 0, (0,1) -> 1, (1,0) -> 2, (1,1) -> 3.
    pub(crate) const fn index(self) -> usize {
        ((self.bit as usize) << 1) | (self.mirror as usize)
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            bit: index & 0b10 != 0,
            mirror: index & 0b01 != 0,
        }
    }
}

impl fmt::Display for BitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", u8::from(self.bit), u8::from(self.mirror))
    }
}

/// A rectangular grid of cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// A binary tag pattern.
pub type BitGrid = Grid<bool>;
/// The redundant encoding: each cell paired with its mirrored counterpart.
pub type PairGrid = Grid<BitPair>;
/// A grid of palette (or monochrome) colors ready for rasterization.
pub type ColorGrid = Grid<Rgb>;

impl<T> Grid<T> {
    /// The 0x0 grid. Degenerate inputs (no rows, or rows of no cells)
    /// normalize to this value rather than failing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Build a `height` x `width` grid by evaluating `f(row, col)` for every
    /// cell. A zero dimension yields the empty grid.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        if height == 0 || width == 0 {
            return Self::empty();
        }
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub(crate) fn from_raw(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of cells per row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// True for the degenerate 0x0 grid.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // max(1) keeps chunks() well-defined for the empty grid.
        self.data.chunks(self.width.max(1))
    }
}

impl<T: Copy> Grid<T> {
    /// Cell accessor.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.height, "row index {row} out of bounds");
        assert!(col < self.width, "column index {col} out of bounds");
        self.data[row * self.width + col]
    }
}

impl Grid<bool> {
    /// Build a bit grid from nested rows of `0`/`1` values.
    ///
    /// Degenerate input (no rows, or a first row of zero width) yields the
    /// empty grid. Jagged input and values outside `{0, 1}` are rejected:
    /// the mirror lookup is only defined for well-formed rectangular
    /// matrices, so malformed shapes are signaled instead of guessed at.
    ///
    /// # Errors
    /// [`ChromaError::JaggedRows`] if a row's width differs from the first
    /// row's, [`ChromaError::InvalidBit`] for any non-binary cell.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ChromaError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Ok(Self::empty());
        }
        let mut data = Vec::with_capacity(height * width);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(ChromaError::JaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                match value {
                    0 => data.push(false),
                    1 => data.push(true),
                    value => return Err(ChromaError::InvalidBit { row, col, value }),
                }
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }
}

impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for &bit in row {
                write!(f, " {}", u8::from(bit))?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid<BitPair> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for pair in row {
                write!(f, " {pair}")?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
