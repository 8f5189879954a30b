use crossterm::{
    queue,
    style::{Print, PrintStyledContent, StyledContent},
};
use std::io::{self, Write};

/// A single line of styled fragments.
#[derive(Clone, Default)]
pub struct StyledText {
    text: Vec<StyledContent<String>>,
}

impl StyledText {
    pub fn new() -> Self {
        Self { text: vec![] }
    }

    pub fn push(&mut self, content: StyledContent<String>) {
        self.text.push(content);
    }

    pub fn len(&self) -> usize {
        self.text
            .iter()
            .map(|elem| elem.content().chars().count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queues the line followed by `end` on `out`. Nothing is flushed.
    pub fn draw<W: Write>(&self, out: &mut W, end: &str) -> io::Result<()> {
        for elem in &self.text {
            queue!(out, PrintStyledContent(elem.clone()))?;
        }
        queue!(out, Print(end))
    }
}
