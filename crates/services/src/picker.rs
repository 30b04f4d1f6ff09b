use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use drill_core::model::{Word, WordList};

/// Uniform sampling with replacement; the same word may come up twice in a row.
#[derive(Debug, Clone)]
pub struct WordPicker {
    rng: StdRng,
}

impl WordPicker {
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `None` only for an empty slice, which `WordList` rules out.
    pub fn pick<'a>(&mut self, words: &'a WordList) -> Option<&'a Word> {
        words.as_slice().choose(&mut self.rng)
    }
}

impl Default for WordPicker {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
