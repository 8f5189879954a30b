// Standard library
use std::fmt;

// External libraries
use tracing::{debug, trace};

// TILEGRID
use super::{Dimensions, Position, SymbolTable};
use crate::error::GridError;

/// Returned by `Grid::get_tile` for coordinates outside the grid.
pub const OUT_OF_BOUNDS: i32 = -1;

/// Largest number of tiles a grid may hold.
pub const MAX_TILES: usize = 1 << 28;

/// Fixed-size rectangular array of integer tiles.
///
/// Every tile starts at `0`. Values are arbitrary integers; the symbol table only matters when
/// rendering the formatted layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dim: Dimensions,
    data: Vec<i32>,
    symbols: SymbolTable,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_symbols(width, height, SymbolTable::default())
    }

    pub fn with_symbols(width: i32, height: i32, symbols: SymbolTable) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let too_large = GridError::TooLarge { width, height };
        let nb_tiles = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| *n <= MAX_TILES)
            .ok_or_else(|| too_large.clone())?;

        let mut data = Vec::new();
        data.try_reserve_exact(nb_tiles).map_err(|_| too_large)?;
        data.resize(nb_tiles, 0);

        debug!(width, height, nb_symbols = symbols.len(), "created grid");
        Ok(Self {
            dim: Dimensions::new(width as u32, height as u32),
            data,
            symbols,
        })
    }

    /// Value at `(x, y)`, or `OUT_OF_BOUNDS` when the coordinates fall outside the grid.
    pub fn get_tile(&self, x: i32, y: i32) -> i32 {
        self.tile(Position::new(x, y)).unwrap_or(OUT_OF_BOUNDS)
    }

    /// Value at `pos`. Unlike `get_tile`, a stored `-1` is distinguishable from a miss.
    pub fn tile(&self, pos: Position) -> Option<i32> {
        self.dim.index(pos).map(|idx| self.data[idx])
    }

    /// Stores `value` at `(x, y)`. Returns `false` and leaves the grid untouched when the
    /// coordinates fall outside the grid.
    pub fn set_tile(&mut self, x: i32, y: i32, value: i32) -> bool {
        match self.dim.index(Position::new(x, y)) {
            Some(idx) => {
                self.data[idx] = value;
                true
            }
            None => {
                trace!(x, y, value, "rejected out-of-bounds write");
                false
            }
        }
    }

    /// One line per row, each tile's decimal value concatenated without separator.
    pub fn layout_raw(&self) -> String {
        self.layout(|s, value| s.push_str(&value.to_string()))
    }

    /// One line per row, each tile mapped through the symbol table.
    pub fn layout_formatted(&self) -> String {
        self.layout(|s, value| s.push_str(self.symbols.render(value)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dim.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dim.height()
    }

    #[inline]
    pub fn dim(&self) -> &Dimensions {
        &self.dim
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Rows in increasing `y`, each holding tiles in increasing `x`.
    pub fn rows(&self) -> std::slice::Chunks<'_, i32> {
        self.data.chunks(self.dim.width() as usize)
    }

    fn layout<F>(&self, mut push_tile: F) -> String
    where
        F: FnMut(&mut String, i32),
    {
        let mut s = String::with_capacity(self.dim.size() + self.dim.height() as usize);
        for (y, row) in self.rows().enumerate() {
            if y != 0 {
                s.push('\n');
            }
            for value in row {
                push_tile(&mut s, *value);
            }
        }
        s
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout_formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 3), (3, 0), (-1, 2), (2, -5), (0, 0)] {
            assert_eq!(
                Grid::new(w, h),
                Err(GridError::InvalidDimension { width: w, height: h })
            );
        }
    }

    #[test]
    fn rejects_oversized_dimensions() {
        for (w, h) in [(i32::MAX, i32::MAX), (100_000, 100_000), (i32::MAX, 1)] {
            assert_eq!(
                Grid::new(w, h),
                Err(GridError::TooLarge { width: w, height: h })
            );
        }
        assert_eq!(
            Grid::new((1 << 14) + 1, 1 << 14),
            Err(GridError::TooLarge { width: (1 << 14) + 1, height: 1 << 14 })
        );
        assert!(Grid::new(1000, 1000).is_ok());
    }

    #[test]
    fn fresh_grid_is_zeroed() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get_tile(x, y), 0);
            }
        }
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid::new(3, 2).unwrap();
        let before = grid.clone();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (3, 2), (i32::MAX, i32::MIN)] {
            assert_eq!(grid.get_tile(x, y), OUT_OF_BOUNDS);
            assert_eq!(grid.tile(Position::new(x, y)), None);
            assert!(!grid.set_tile(x, y, 1));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn stored_minus_one_is_not_a_miss() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.set_tile(1, 1, -1));
        assert_eq!(grid.get_tile(1, 1), OUT_OF_BOUNDS);
        assert_eq!(grid.tile(Position::new(1, 1)), Some(-1));
    }

    #[test]
    fn layouts_of_fresh_grid() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.layout_raw(), "000\n000");
        assert_eq!(grid.layout_formatted(), "   \n   ");
    }

    #[test]
    fn layouts_after_writes() {
        let mut grid = Grid::new(3, 2).unwrap();
        assert!(grid.set_tile(1, 0, 1));
        assert!(grid.set_tile(2, 1, 1));
        assert_eq!(grid.layout_raw(), "010\n001");
        assert_eq!(grid.layout_formatted(), " # \n  #");
        assert_eq!(grid.to_string(), " # \n  #");
    }

    #[test]
    fn unknown_values_render_as_placeholder() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.set_tile(0, 0, 5));
        let formatted = grid.layout_formatted();
        assert!(formatted.starts_with('?'));
        assert_eq!(formatted, "?  \n   \n   ");

        assert!(grid.set_tile(0, 0, 1));
        let formatted = grid.layout_formatted();
        assert!(formatted.starts_with('#'));
        assert_eq!(formatted.chars().filter(|c| *c == ' ').count(), 8);
    }

    #[test]
    fn raw_layout_keeps_multi_digit_values_undelimited() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_tile(0, 0, 12);
        grid.set_tile(1, 0, -3);
        assert_eq!(grid.layout_raw(), "12-3");
        assert_eq!(grid.layout_formatted(), "??");
    }

    #[test]
    fn custom_symbols() {
        let symbols = SymbolTable::new([".", "#", "~"]);
        let mut grid = Grid::with_symbols(3, 1, symbols).unwrap();
        grid.set_tile(1, 0, 2);
        grid.set_tile(2, 0, 3);
        assert_eq!(grid.layout_formatted(), ".~?");
    }

    #[test]
    fn single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.layout_raw(), "0");
        assert!(grid.set_tile(0, 0, 1));
        assert_eq!(grid.layout_formatted(), "#");
        assert_eq!(grid.rows().count(), 1);
    }

    proptest! {
        #[test]
        fn write_then_read(
            w in 1i32..20,
            h in 1i32..20,
            x in 0i32..20,
            y in 0i32..20,
            v in any::<i32>()
        ) {
            let (x, y) = (x % w, y % h);
            let mut grid = Grid::new(w, h).unwrap();
            prop_assert!(grid.set_tile(x, y, v));
            prop_assert_eq!(grid.tile(Position::new(x, y)), Some(v));

            // No other tile changed
            for oy in 0..h {
                for ox in 0..w {
                    if (ox, oy) != (x, y) {
                        prop_assert_eq!(grid.get_tile(ox, oy), 0);
                    }
                }
            }
        }

        #[test]
        fn outside_reads_and_writes_are_inert(
            w in 1i32..20,
            h in 1i32..20,
            x in any::<i32>(),
            y in any::<i32>(),
            v in any::<i32>()
        ) {
            prop_assume!(x < 0 || y < 0 || x >= w || y >= h);
            let mut grid = Grid::new(w, h).unwrap();
            let before = grid.clone();
            prop_assert_eq!(grid.get_tile(x, y), OUT_OF_BOUNDS);
            prop_assert!(!grid.set_tile(x, y, v));
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn layouts_follow_row_values(
            (w, h, values) in (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
                (Just(w), Just(h), prop::collection::vec(0i32..=9, w * h))
            })
        ) {
            let mut grid = Grid::new(w as i32, h as i32).unwrap();
            for (idx, value) in values.iter().enumerate() {
                prop_assert!(grid.set_tile((idx % w) as i32, (idx / w) as i32, *value));
            }

            let raw = grid.layout_raw();
            let formatted = grid.layout_formatted();
            prop_assert_eq!(raw.split('\n').count(), h);
            prop_assert_eq!(formatted.split('\n').count(), h);
            for ((raw_line, formatted_line), row) in
                raw.split('\n').zip(formatted.split('\n')).zip(values.chunks(w))
            {
                let expected_raw: String = row.iter().map(|v| v.to_string()).collect();
                let expected_formatted: String = row
                    .iter()
                    .map(|v| match v {
                        0 => ' ',
                        1 => '#',
                        _ => '?',
                    })
                    .collect();
                prop_assert_eq!(raw_line, expected_raw);
                prop_assert_eq!(formatted_line, expected_formatted);
            }
        }

        #[test]
        fn layouts_have_one_line_per_row(w in 1i32..30, h in 1i32..30) {
            let grid = Grid::new(w, h).unwrap();
            let raw = grid.layout_raw();
            let formatted = grid.layout_formatted();
            prop_assert!(!raw.ends_with('\n'));
            prop_assert_eq!(raw.lines().count(), h as usize);
            prop_assert!(raw.lines().all(|l| l.len() == w as usize && l.chars().all(|c| c == '0')));
            let blank_row = " ".repeat(w as usize);
            let expected = vec![blank_row; h as usize].join("\n");
            prop_assert_eq!(formatted, expected);
        }
    }
}
