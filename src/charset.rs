use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use std::fmt;

/// Ordered set of the unique characters appearing in a text.
///
/// Characters keep the order of their first appearance, so the index of a
/// character never changes once the set is built.
#[derive(Debug, Clone, Default)]
pub struct CharacterSet {
    chars: Vec<char>,
    /// Reverse lookup from character to its position in `chars`
    index: HashMap<char, usize>,
}

impl CharacterSet {
    /// Extracts the unique characters of `text` in first-occurrence order.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Returns the position of `c`, if present.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Returns the character stored at `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut chars = Vec::new();
        for c in iter {
            if seen.insert(c) {
                chars.push(c);
            }
        }
        let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { chars, index }
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for CharacterSet {}

/// Formats the set as a single JSON string, e.g. `"abc"`.
impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: String = self.chars.iter().collect();
        let quoted = serde_json::to_string(&joined).map_err(|_| fmt::Error)?;
        f.write_str(&quoted)
    }
}
