//! # tamil-sandhi
//!
//! Sandhi-aware morphological segmentation of Tamil text.
//!
//! Words written together in Tamil change at their joins: consonants double,
//! glides appear between vowels, nasals assimilate. This crate undoes those
//! changes while searching for the split of a word into dictionary words and
//! grammatical suffixes that covers the most of it with the fewest words.
//!
//! ## Quick Start
//!
//! ```rust
//! use tamil_sandhi::{Analyzer, ReferenceData, WordList};
//!
//! let lexicon = WordList::new(["மரம்", "வீடு"]);
//! let analyzer = Analyzer::new(ReferenceData::new(lexicon));
//!
//! let result = analyzer.segment_word("வீட்டுக்கு");
//! assert_eq!(result.to_string(), "வீடு");
//! ```
//!
//! ## Online dictionary
//!
//! With the default `download` feature, [`CachedLexicon`] fetches headwords
//! from the DSAL Fabricius dictionary one initial letter at a time and keeps
//! them in a local cache directory.

pub mod analyzer;
pub mod chunker;
pub mod codec;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod grammar;
pub mod lexicon;
pub mod phoneme;
pub mod reference;
pub mod sandhi;
pub mod segmenter;
pub mod validity;

// Re-export main types for convenience
pub use analyzer::{Analyzer, Token, Vocabulary};
pub use chunker::{Chunk, ChunkType, Chunker, Word};
pub use codec::{decode, encode};
pub use entry::{Entry, SplitResult, PART_SEPARATOR};
pub use error::{Error, Result};
pub use fetch::LexiconConfig;
pub use grammar::{GrammarSet, VerbEndingTable};
pub use lexicon::{CachedLexicon, Lexicon, WordList};
pub use phoneme::{Phoneme, PhonemeClass};
pub use reference::ReferenceData;
pub use sandhi::VariationGenerator;
pub use segmenter::Segmenter;
pub use validity::is_valid;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let lexicon = WordList::new(["அவன்", "வீடு", "போ", "மரம்", "கடல்"]);
        let analyzer = Analyzer::new(ReferenceData::new(lexicon));

        let tokens = analyzer.analyze_line("அவன் வீட்டுக்கு. மரக்கடல்");
        let words: Vec<String> = tokens
            .iter()
            .filter_map(|t| t.split.as_ref())
            .map(|s| s.to_string())
            .collect();

        assert_eq!(words, vec!["அவன்", "வீடு", "மரம் + கடல்"]);
        assert!(tokens.iter().any(|t| !t.is_word()));

        let mut vocabulary = Vocabulary::new();
        for split in tokens.iter().filter_map(|t| t.split.as_ref()) {
            vocabulary.add(split);
        }
        assert_eq!(vocabulary.len(), 4);
    }

    #[test]
    fn test_default_reference_data() {
        let data = ReferenceData::new(WordList::default());
        assert!(!data.grammar.is_empty());
        assert!(!data.verb_endings.is_empty());
        assert!(data.grammar.contains("இல்"));
    }
}
