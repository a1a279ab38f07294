//! TileMap module - the immutable level grid
//!
//! The map is a `width` x `height` grid of single-character symbols stored in
//! row-major order (`col + row * width`). A space is walkable floor; any other
//! symbol is a wall, and digits additionally carry a wall variant id.
//!
//! World coordinates are floats in cell units. A world point maps to the cell
//! `(trunc(x), trunc(y))`; points off the map count as walls so ray marches
//! can never escape the level.

use crate::error::RenderError;

/// Reference 16x16 level.
pub const DEFAULT_MAP_ROWS: [&str; 16] = [
    "0000222222220000",
    "1              0",
    "1   11 11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   0   11100  0",
    "0   0   0      0",
    "0   0   1  00000",
    "0       1      0",
    "2       1111   0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
];

pub const DEFAULT_MAP_WIDTH: usize = 16;
pub const DEFAULT_MAP_HEIGHT: usize = 16;

/// Meaning of one map symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// `variant` is the digit for `0`-`9` symbols, `None` for other walls.
    Wall { variant: Option<u8> },
}

impl Tile {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            ' ' => Tile::Empty,
            d => Tile::Wall {
                variant: d.to_digit(10).map(|v| v as u8),
            },
        }
    }

    #[inline(always)]
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall { .. })
    }
}

/// Fixed-size grid of map symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    symbols: Vec<char>,
}

impl TileMap {
    /// Build a map from its rows.
    ///
    /// Rows are concatenated, so their individual lengths do not matter; only
    /// the total symbol count must equal `width * height`.
    pub fn parse<S: AsRef<str>>(rows: &[S], width: usize, height: usize) -> Result<Self, RenderError> {
        let symbols: Vec<char> = rows.iter().flat_map(|r| r.as_ref().chars()).collect();
        Self::from_symbols(symbols, width, height)
    }

    /// Build a map from one row-major string.
    pub fn from_str_grid(grid: &str, width: usize, height: usize) -> Result<Self, RenderError> {
        Self::from_symbols(grid.chars().collect(), width, height)
    }

    fn from_symbols(symbols: Vec<char>, width: usize, height: usize) -> Result<Self, RenderError> {
        // An overflowing product can never match a real symbol count.
        let expected = width.checked_mul(height).unwrap_or(usize::MAX);
        if symbols.len() != expected {
            return Err(RenderError::MalformedMap {
                expected,
                actual: symbols.len(),
            });
        }
        Ok(Self {
            width,
            height,
            symbols,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn symbol_at(&self, col: usize, row: usize) -> Result<char, RenderError> {
        if col >= self.width || row >= self.height {
            return Err(RenderError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.symbols[col + row * self.width])
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Result<Tile, RenderError> {
        self.symbol_at(col, row).map(Tile::from_symbol)
    }

    /// Wall test for a world point; anything off the map is a wall.
    ///
    /// The cell is found by truncating toward zero, so `-0.5` still reads
    /// column 0.
    #[inline]
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if x.is_nan() || y.is_nan() {
            return true;
        }
        let (tx, ty) = (x.trunc(), y.trunc());
        if tx < 0.0 || ty < 0.0 {
            return true;
        }
        // Saturating casts push huge values past the extent.
        let (col, row) = (tx as usize, ty as usize);
        match self.cell_at(col, row) {
            Ok(tile) => tile.is_wall(),
            Err(_) => true,
        }
    }

    /// All cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let w = self.width;
        self.symbols
            .iter()
            .enumerate()
            .map(move |(i, &s)| (i % w, i / w, Tile::from_symbol(s)))
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            symbols: DEFAULT_MAP_ROWS.iter().flat_map(|r| r.chars()).collect(),
        }
    }
}
