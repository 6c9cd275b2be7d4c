use std::fmt;

use pwgen_core::CharClasses;

/// Everything a generation run needs, built once from the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Characters per password.
    pub length: usize,
    /// Number of passwords.
    pub count: usize,
    pub classes: CharClasses,
    /// Print the phonetic spelling next to each password.
    pub spell: bool,
    /// Decoded seed bytes; `None` selects the OS random source.
    pub seed: Option<Vec<u8>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { length: 12, count: 6, classes: CharClasses::default(), spell: false, seed: None }
    }
}

// Seed bytes are as sensitive as the passwords they reproduce.
impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("length", &self.length)
            .field("count", &self.count)
            .field("classes", &self.classes)
            .field("spell", &self.spell)
            .field("seeded", &self.seed.is_some())
            .finish()
    }
}
