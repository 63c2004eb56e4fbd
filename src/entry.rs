//! Segmentation results.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::codec::encode;
use crate::phoneme::Phoneme;

/// Separator printed between the parts of one word
pub const PART_SEPARATOR: &str = " + ";

fn serialize_phonemes<S: Serializer>(phonemes: &[Phoneme], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(phonemes))
}

/// One part of a segmented word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The phonemes of this part as they appear in the text
    #[serde(serialize_with = "serialize_phonemes")]
    pub raw: Vec<Phoneme>,

    /// The dictionary word or suffix this part was matched to
    pub form: Option<String>,

    /// Whether `form` is a grammatical suffix rather than a dictionary word
    pub grammatical: bool,
}

impl Entry {
    /// A part that matched nothing
    pub fn unresolved(raw: Vec<Phoneme>) -> Self {
        Entry {
            raw,
            form: None,
            grammatical: false,
        }
    }

    /// A part matched to `form`
    pub fn resolved(raw: Vec<Phoneme>, form: String, grammatical: bool) -> Self {
        Entry {
            raw,
            form: Some(form),
            grammatical,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.form.is_some()
    }

    /// The raw phonemes written back out as text
    pub fn raw_text(&self) -> String {
        encode(&self.raw)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            Some(ref form) => write!(f, "{}", form),
            None => write!(f, "({})", self.raw_text()),
        }
    }
}

/// The best segmentation found for one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    /// Number of phonemes covered by resolved entries
    pub coverage: usize,

    /// Number of dictionary words used, counting an unresolved remainder as one
    pub word_count: usize,

    /// Parts of the word, in text order
    pub entries: Vec<Entry>,
}

impl SplitResult {
    /// The result for an empty span
    pub fn empty() -> Self {
        SplitResult::default()
    }

    /// Dictionary words in this result, excluding grammatical suffixes
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.grammatical)
            .filter_map(|e| e.form.as_deref())
    }
}

impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(PART_SEPARATOR)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
