//! Dictionary lookup.
//!
//! The segmenter only ever asks whether a written form is a known word. Two
//! implementations are provided: [`WordList`], a plain in-memory set, and
//! [`CachedLexicon`], which loads headwords per initial letter from a local
//! cache and, with the `download` feature, from the dictionary service.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::fetch::{self, LexiconConfig};
use crate::grammar::read_string_list;

/// Membership test for dictionary headwords
pub trait Lexicon {
    /// Whether `form` is a dictionary headword
    fn contains(&self, form: &str) -> bool;
}

impl<T: Lexicon + ?Sized> Lexicon for &T {
    fn contains(&self, form: &str) -> bool {
        (**self).contains(form)
    }
}

impl<T: Lexicon + ?Sized> Lexicon for Box<T> {
    fn contains(&self, form: &str) -> bool {
        (**self).contains(form)
    }
}

/// An in-memory word list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON array of words
    pub fn from_json_str(json: &str) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(json).map_err(|source| Error::Json {
            path: PathBuf::from("<string>"),
            source,
        })?;
        Ok(Self::new(words))
    }

    /// Load a JSON array of words from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_string_list(path.as_ref())?))
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    fn contains(&self, form: &str) -> bool {
        self.words.contains(form)
    }
}

/// Headwords loaded lazily, one initial letter at a time.
///
/// A letter is read from `<cache_dir>/<letter>.json` when present and
/// downloaded otherwise. A letter that fails to load is reported once and
/// then treated as having no words for the rest of the run.
#[derive(Debug)]
pub struct CachedLexicon {
    config: LexiconConfig,
    letters: RwLock<HashMap<char, HashSet<String>>>,
}

impl CachedLexicon {
    pub fn new(config: LexiconConfig) -> Self {
        CachedLexicon {
            config,
            letters: RwLock::new(HashMap::new()),
        }
    }

    /// Load the words for `letter` now, returning how many there are.
    ///
    /// Unlike [`Lexicon::contains`], this reports failures.
    pub fn prefetch(&self, letter: char) -> Result<usize> {
        let words = self.load_letter(letter)?;
        let count = words.len();
        if let Ok(mut letters) = self.letters.write() {
            letters.insert(letter, words);
        }
        Ok(count)
    }

    fn load_letter(&self, letter: char) -> Result<HashSet<String>> {
        let path = fetch::letter_cache_path(&self.config.cache_dir, letter);
        if path.is_file() {
            let words = fetch::read_cached(&path)?;
            if !words.is_empty() {
                return Ok(words);
            }
        }
        self.download_letter(letter, &path)
    }

    #[cfg(feature = "download")]
    fn download_letter(&self, letter: char, path: &Path) -> Result<HashSet<String>> {
        let words = fetch::fetch_headwords(&self.config, letter)?;
        fetch::write_cache(path, &words)?;
        Ok(words)
    }

    #[cfg(not(feature = "download"))]
    fn download_letter(&self, letter: char, _path: &Path) -> Result<HashSet<String>> {
        Err(Error::DownloadDisabled(letter))
    }
}

impl Lexicon for CachedLexicon {
    fn contains(&self, form: &str) -> bool {
        let Some(letter) = form.chars().next() else {
            return false;
        };

        if let Ok(letters) = self.letters.read() {
            if let Some(words) = letters.get(&letter) {
                return words.contains(form);
            }
        }

        let words = self.load_letter(letter).unwrap_or_else(|e| {
            eprintln!("[WARN] Could not load '{}' words: {}", letter, e);
            HashSet::new()
        });
        let found = words.contains(form);

        if let Ok(mut letters) = self.letters.write() {
            letters.insert(letter, words);
        }
        found
    }
}
