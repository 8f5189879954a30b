// TILEGRID
pub mod commands;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod terminal_ui;

pub use error::{CommandError, GridError};
pub use grid::{Dimensions, Grid, Position, SymbolTable, OUT_OF_BOUNDS, UNKNOWN_SYMBOL};
