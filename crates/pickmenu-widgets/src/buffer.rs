#![forbid(unsafe_code)]

//! A minimal char-cell paint target.
//!
//! One printable character per cell plus a style. Wide graphemes occupy
//! their leading cell; the drawing helpers in the crate root advance the
//! cursor by display width so trailing cells stay blank.

use crate::style::Style;

/// A single buffer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

impl Cell {
    /// Create a cell holding the given character.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            style: Style::default(),
        }
    }

    /// The cell's character.
    #[must_use]
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Whether the cell holds no visible content or styling.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.style.is_empty()
    }
}

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get the cell at (x, y), if in bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get the cell at (x, y) mutably, if in bounds.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
