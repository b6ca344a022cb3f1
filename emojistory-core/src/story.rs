//! The story: an append-only list of resolved words.

use serde::Serialize;

/// Glyph shown when a word has no emoji.
pub const FALLBACK_GLYPH: &str = "❓";

/// Name shown when a word has no emoji.
pub const FALLBACK_NAME: &str = "unknown";

/// A word resolved to a glyph and a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub glyph: String,
    pub name: String,
}

impl ResolvedEntry {
    pub fn new(glyph: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
        }
    }

    /// The fallback entry used when a lookup finds nothing or fails.
    pub fn unknown() -> Self {
        Self::new(FALLBACK_GLYPH, FALLBACK_NAME)
    }

    /// Stand the typed word in for the glyph.
    pub fn echo(word: &str) -> Self {
        Self::new(word, FALLBACK_NAME)
    }

    pub fn is_unknown(&self) -> bool {
        self.glyph == FALLBACK_GLYPH && self.name == FALLBACK_NAME
    }
}

/// Resolved entries in word order.
///
/// Glyphs and names are kept as parallel sequences; [`Story::append`] is the
/// only mutator and always grows both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Story {
    glyphs: Vec<String>,
    names: Vec<String>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its index.
    pub fn append(&mut self, entry: ResolvedEntry) -> usize {
        let index = self.glyphs.len();
        self.glyphs.push(entry.glyph);
        self.names.push(entry.name);
        debug_assert_eq!(self.glyphs.len(), self.names.len());
        index
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Glyph and name at `index`.
    pub fn get(&self, index: usize) -> Option<(&str, &str)> {
        Some((self.glyphs.get(index)?, self.names.get(index)?))
    }

    pub fn last(&self) -> Option<(&str, &str)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate `(glyph, name)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.glyphs
            .iter()
            .zip(&self.names)
            .map(|(g, n)| (g.as_str(), n.as_str()))
    }
}
