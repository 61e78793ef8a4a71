//! Word lists for Spelling Bee
//!
//! A `Dictionary` is an immutable set of lowercase words. Storage is hidden
//! behind `DictionarySource` so the game can read from a file or from memory.

pub mod loader;

pub use loader::{DictionaryError, load_from_file};

use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Dictionary file used when no other path is configured
pub const DEFAULT_DICTIONARY: &str = "EnglishWords.txt";

/// Set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a word is present (expects lowercase input)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_lowercase).collect()
    }
}

/// Where the game gets its dictionary from
///
/// Called once per solve or check action.
pub trait DictionarySource {
    /// Produce the current dictionary
    ///
    /// # Errors
    /// Returns a `DictionaryError` if the underlying storage cannot be read.
    fn load(&self) -> Result<Dictionary, DictionaryError>;
}

/// Dictionary read from a word list file on every load
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY)
    }
}

impl DictionarySource for FileDictionary {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        load_from_file(&self.path)
    }
}

impl DictionarySource for Dictionary {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Ok(self.clone())
    }
}
