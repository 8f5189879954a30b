// Standard library
use std::str::FromStr;

// External libraries
use tracing::trace;

// TILEGRID
use crate::error::CommandError;
use crate::grid::{Grid, Position};

/// A parsed session command with its arguments already typed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Get(Position),
    Set(Position, i32),
    Raw,
    Show,
    Size,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(cmd: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = cmd.split_whitespace().collect();
        match tokens[..] {
            [] => Err(CommandError::Empty),
            ["get", x, y] => Ok(Command::Get(Position::new(
                parse_arg("x", x)?,
                parse_arg("y", y)?,
            ))),
            ["set", x, y, value] => Ok(Command::Set(
                Position::new(parse_arg("x", x)?, parse_arg("y", y)?),
                parse_arg("value", value)?,
            )),
            ["raw"] => Ok(Command::Raw),
            ["show"] => Ok(Command::Show),
            ["size"] => Ok(Command::Size),
            ["quit"] => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(String::from(cmd.trim()))),
        }
    }
}

fn parse_arg(name: &str, value: &str) -> Result<i32, CommandError> {
    value.parse::<i32>().map_err(|_| CommandError::InvalidArgument {
        name: String::from(name),
        value: String::from(value),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Tile(i32),
    Written(bool),
    Raw(String),
    /// The formatted layout was requested; the caller renders `Session::grid`.
    Show,
    Size(u32, u32),
    Quit,
}

/// Interactive command session over a single grid.
pub struct Session {
    grid: Grid,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn execute(&mut self, cmd: &str) -> Result<Response, CommandError> {
        let command: Command = cmd.parse()?;
        trace!(?command, "executing command");

        Ok(match command {
            Command::Get(pos) => Response::Tile(self.grid.get_tile(pos.x(), pos.y())),
            Command::Set(pos, value) => {
                Response::Written(self.grid.set_tile(pos.x(), pos.y(), value))
            }
            Command::Raw => Response::Raw(self.grid.layout_raw()),
            Command::Show => Response::Show,
            Command::Size => Response::Size(self.grid.width(), self.grid.height()),
            Command::Quit => Response::Quit,
        })
    }
}
