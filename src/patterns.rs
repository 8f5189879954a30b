// External libraries
use cascade::cascade;

// TILEGRID
use crate::error::GridError;
use crate::grid::Grid;

pub const WALL: i32 = 1;

pub fn empty(width: i32, height: i32) -> Result<Grid, GridError> {
    Grid::new(width, height)
}

/// Grid whose edge tiles are walls.
pub fn bordered(width: i32, height: i32) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    for x in 0..width {
        grid.set_tile(x, 0, WALL);
        grid.set_tile(x, height - 1, WALL);
    }
    for y in 0..height {
        grid.set_tile(0, y, WALL);
        grid.set_tile(width - 1, y, WALL);
    }
    Ok(grid)
}

/// 7x5 walled room with a door in the bottom wall and an unmapped tile inside.
pub fn room() -> Result<Grid, GridError> {
    let grid = bordered(7, 5)?;
    Ok(cascade!(
        grid;
        ..set_tile(3, 4, 0);
        ..set_tile(2, 2, WALL);
        ..set_tile(4, 2, WALL);
        ..set_tile(3, 2, 9);
    ))
}
