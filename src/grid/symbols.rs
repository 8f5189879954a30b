// Standard library
use std::collections::BTreeMap;

/// Placeholder emitted for cell values with no symbol.
pub const UNKNOWN_SYMBOL: &str = "?";

/// Ordered mapping from cell value to display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<u32, String>,
}

impl SymbolTable {
    /// Builds a table where the n-th symbol is displayed for cell value n.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols = symbols
            .into_iter()
            .enumerate()
            .map(|(idx, sym)| (idx as u32, sym.into()))
            .collect();
        Self { symbols }
    }

    pub fn lookup(&self, value: i32) -> Option<&str> {
        if value < 0 {
            return None;
        }
        self.symbols.get(&(value as u32)).map(|s| &s[..])
    }

    pub fn render(&self, value: i32) -> &str {
        self.lookup(value).unwrap_or(UNKNOWN_SYMBOL)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.symbols.iter().map(|(v, s)| (*v, &s[..]))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new([" ", "#"])
    }
}
