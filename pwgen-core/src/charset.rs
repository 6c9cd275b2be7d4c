//! Character categories and the working alphabet built from them.

use crate::{Error, MAX_CHARSET_LEN, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMERIC: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%&*()-_=+[]{};:,.<>/?";

/// Characters that are easy to confuse with one another when read back.
pub const AMBIGUOUS: &str = "l1IO0";

/// Which categories make up the charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub numeric: bool,
    pub special: bool,
    /// Strip [`AMBIGUOUS`] after the categories are joined.
    pub exclude_ambiguous: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self { lower: true, upper: true, numeric: true, special: false, exclude_ambiguous: false }
    }
}

impl CharClasses {
    /// True when at least one category is selected.
    pub fn any(&self) -> bool {
        self.lower || self.upper || self.numeric || self.special
    }
}

/// Ordered alphabet that passwords are drawn from.
///
/// Duplicates are allowed but weight the duplicated character accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Creates a charset from an explicit list of characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(Error::EmptyCharset);
        }
        if chars.len() > MAX_CHARSET_LEN {
            return Err(Error::InvalidRange { len: chars.len() });
        }
        Ok(Self { chars })
    }

    /// Joins the selected categories in lower, upper, numeric, special order,
    /// then removes ambiguous characters if requested.
    pub fn from_classes(classes: &CharClasses) -> Result<Self> {
        if !classes.any() {
            return Err(Error::NoCategories);
        }

        let selected = [
            (classes.lower, LOWERCASE),
            (classes.upper, UPPERCASE),
            (classes.numeric, NUMERIC),
            (classes.special, SPECIAL),
        ];

        let charset = Self::new(
            selected
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .flat_map(|(_, set)| set.chars())
                .filter(|c| !classes.exclude_ambiguous || !AMBIGUOUS.contains(*c)),
        )?;

        tracing::debug!(
            len = charset.len(),
            bits_per_char = charset.entropy_bits_per_char(),
            "assembled charset"
        );
        Ok(charset)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Entropy contributed by one uniformly drawn character.
    pub fn entropy_bits_per_char(&self) -> f64 {
        (self.chars.len() as f64).log2()
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
