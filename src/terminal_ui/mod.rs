// Standard library
use std::collections::HashMap;
use std::io::{self, Write};

// External libraries
use crossterm::style::{style, Attribute, Color, StyledContent, Stylize};

// TILEGRID
mod styled_text;
use crate::grid::{Grid, UNKNOWN_SYMBOL};
use crate::patterns::WALL;
pub use styled_text::StyledText;

/// Terminal styles per tile value. Values without an entry are printed unstyled.
pub struct Palette {
    styles: HashMap<i32, (Color, Option<Attribute>)>,
    unknown: Option<Color>,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            styles: HashMap::new(),
            unknown: None,
        }
    }

    pub fn with(mut self, value: i32, color: Color, attribute: Option<Attribute>) -> Self {
        self.styles.insert(value, (color, attribute));
        self
    }

    fn paint(&self, grid: &Grid, value: i32) -> StyledContent<String> {
        let symbol = grid.symbols().lookup(value);
        let content = style(String::from(symbol.unwrap_or(UNKNOWN_SYMBOL)));
        match (symbol, self.styles.get(&value), self.unknown) {
            (Some(_), Some((color, Some(attr))), _) => content.with(*color).attribute(*attr),
            (Some(_), Some((color, None)), _) => content.with(*color),
            (None, _, Some(color)) => content.with(color).attribute(Attribute::Bold),
            _ => content,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            unknown: Some(Color::Red),
        }
        .with(0, Color::Grey, None)
        .with(WALL, Color::Green, Some(Attribute::Bold))
    }
}

/// Builds the formatted layout of `grid` as one styled line per row.
pub fn styled_rows(grid: &Grid, palette: &Palette) -> Vec<StyledText> {
    grid.rows()
        .map(|row| {
            let mut line = StyledText::new();
            for value in row {
                line.push(palette.paint(grid, *value));
            }
            line
        })
        .collect()
}

/// Prints the formatted layout of `grid` on `out`, followed by a newline.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid, palette: &Palette) -> io::Result<()> {
    for line in styled_rows(grid, palette) {
        line.draw(out, "\n")?;
    }
    out.flush()
}
