#![forbid(unsafe_code)]

//! Surface grid storage.
//!
//! The `Surface` is a 2D grid of [`Cell`]s owned by the overlay. Cells are
//! stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Out-of-bounds writes are dropped silently; reads return `None`
//!
//! Invariant 3 is what lets the overlay run inside a render loop without a
//! fallible API: a bad coordinate loses a pixel, never the frame.

use crate::cell::Cell;
use thud_core::geometry::{Rect, Size};

/// A 2D grid of raster cells.
///
/// # Example
///
/// ```
/// use thud_render::{Cell, Surface};
///
/// let mut surface = Surface::new(80, 24);
/// surface.set(0, 0, Cell::from_char('H'));
/// surface.set(1, 0, Cell::from_char('i'));
/// assert_eq!(surface.row_string(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create a new surface with the given dimensions.
    ///
    /// All cells start blank with a transparent background.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "surface width must be > 0");
        assert!(height > 0, "surface height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Surface width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Surface height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Surface dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding rect of the entire surface.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangular region with the given cell.
    ///
    /// The region is clipped to the surface bounds.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            let start = y as usize * self.width as usize + clipped.x as usize;
            self.cells[start..start + clipped.width as usize].fill(cell);
        }
    }

    /// Clear all cells to the given cell.
    pub fn clear_with(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Shift the columns of a region one cell to the left.
    ///
    /// Reads columns `[x+1, right)` of the region and writes them to
    /// `[x, right-1)`. The leftmost column is discarded; the rightmost
    /// column keeps its previous content and is expected to be overwritten
    /// by the caller. Regions narrower than 2 columns are a no-op.
    ///
    /// This is the scroll step of the strip-chart graphs: the surface
    /// itself is the sample history, so cost is proportional to the region
    /// and independent of how long the overlay has been running.
    pub fn shift_columns_left(&mut self, rect: Rect) {
        let clipped = self.bounds().intersection(&rect);
        if clipped.width < 2 {
            return;
        }
        for y in clipped.y..clipped.bottom() {
            let row = y as usize * self.width as usize;
            let start = row + clipped.x as usize;
            let end = row + clipped.right() as usize;
            self.cells.copy_within(start + 1..end, start);
        }
    }

    /// Raw access to the cell slice (row-major).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of a single row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The glyphs of a single row as a `String` (colors ignored).
    ///
    /// Intended for tests and debug dumps.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_string(&self, y: u16) -> String {
        self.row_cells(y).iter().map(|c| c.ch).collect()
    }

    /// The cells of a single column within `rect`, top to bottom.
    ///
    /// Intended for tests asserting on plotted bar columns.
    pub fn column_cells(&self, x: u16, rect: Rect) -> Vec<Cell> {
        (rect.y..rect.bottom())
            .filter_map(|y| self.get(x, y).copied())
            .collect()
    }

    /// Check if two surfaces have identical content.
    pub fn content_eq(&self, other: &Surface) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}
