// TILEGRID
pub mod grid;
pub mod symbols;
pub use grid::{Grid, MAX_TILES, OUT_OF_BOUNDS};
pub use symbols::{SymbolTable, UNKNOWN_SYMBOL};

/// Coordinates of a cell. Any pair of integers is a valid position to ask about, only those
/// inside the grid's `Dimensions` address a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl From<(i32, i32)> for Position {
    fn from(pos: (i32, i32)) -> Self {
        Position::new(pos.0, pos.1)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        0 <= pos.x()
            && 0 <= pos.y()
            && (pos.x() as u32) < self.width
            && (pos.y() as u32) < self.height
    }

    /// Row-major index of `pos` in the backing storage, `None` outside the grid.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y() as usize) * (self.width as usize) + (pos.x() as usize))
        } else {
            None
        }
    }
}
