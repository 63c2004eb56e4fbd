//! Line-level segmentation.
//!
//! The analyzer chunks a line, segments every Tamil word with the context of
//! its neighbours, and hands back the chunks in order.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::chunker::{self, ChunkType, Chunker};
use crate::codec::decode;
use crate::entry::SplitResult;
use crate::lexicon::Lexicon;
use crate::reference::ReferenceData;

/// One chunk of an analyzed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The text of the chunk
    pub text: String,

    /// Starting byte offset in the normalized line
    pub start: usize,

    /// Length in bytes
    pub len: usize,

    pub chunk_type: ChunkType,

    /// The segmentation, for Tamil words only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitResult>,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.chunk_type == ChunkType::Tamil
    }
}

/// Segments lines of text against shared reference data
pub struct Analyzer<L> {
    data: Arc<ReferenceData<L>>,
}

impl<L: Lexicon> Analyzer<L> {
    pub fn new(data: ReferenceData<L>) -> Self {
        Analyzer {
            data: Arc::new(data),
        }
    }

    /// Create an analyzer over reference data shared with others
    pub fn with_arc(data: Arc<ReferenceData<L>>) -> Self {
        Analyzer { data }
    }

    pub fn data(&self) -> &ReferenceData<L> {
        &self.data
    }

    /// Segment every Tamil word of a line.
    ///
    /// The line is NFC-normalized first, so offsets refer to the normalized text.
    pub fn analyze_line(&self, line: &str) -> Vec<Token> {
        let normalized: String = line.nfc().collect();
        let chunks = Chunker::new(&normalized).make_chunks();
        let words = chunker::words(&chunks);

        let mut tokens: Vec<Token> = chunks
            .into_iter()
            .map(|c| Token {
                text: c.text,
                start: c.start,
                len: c.len,
                chunk_type: c.chunk_type,
                split: None,
            })
            .collect();

        for word in words {
            let split = self.data.search(&word.phonemes, word.left, word.right);
            if let Some(token) = tokens.get_mut(word.chunk) {
                token.split = Some(split);
            }
        }

        tokens
    }

    /// Segment a single word with no surrounding context
    pub fn segment_word(&self, word: &str) -> SplitResult {
        self.data.search(&decode(word), None, None)
    }
}

/// Dictionary words seen across a run, sorted and without repeats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary(BTreeSet<String>);

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dictionary words of one segmentation
    pub fn add(&mut self, result: &SplitResult) {
        self.0.extend(result.vocabulary().map(str::to_string));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(word)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarSet;
    use crate::lexicon::WordList;

    fn analyzer() -> Analyzer<WordList> {
        let data = ReferenceData::new(WordList::new(["மரம்", "கடல்", "வீடு", "அந்த", "கடை"]))
            .with_grammar(GrammarSet::new(["இல்", "கு"]));
        Analyzer::new(data)
    }

    #[test]
    fn test_analyze_line() {
        let tokens = analyzer().analyze_line("மரத்தில், abc");

        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_word());
        assert_eq!(tokens[0].split.as_ref().map(|s| s.to_string()).as_deref(), Some("மரம்"));
        assert!(tokens[1].split.is_none());
        assert_eq!(tokens[1].text, ", abc");
    }

    #[test]
    fn test_context_across_words() {
        let tokens = analyzer().analyze_line("அந்தக் கடை");

        let splits: Vec<String> = tokens
            .iter()
            .filter_map(|t| t.split.as_ref())
            .map(|s| s.to_string())
            .collect();
        assert_eq!(splits, vec!["அந்த", "கடை"]);
    }

    #[test]
    fn test_segment_word() {
        let result = analyzer().segment_word("வீட்டுக்கு");
        assert_eq!(result.to_string(), "வீடு");
        assert_eq!(result.word_count, 1);
    }

    #[test]
    fn test_shared_reference_data() {
        let first = analyzer();
        let second = Analyzer::with_arc(Arc::clone(&first.data));

        assert!(Arc::ptr_eq(&first.data, &second.data));
        assert_eq!(second.segment_word("மரத்தில்").to_string(), "மரம்");
        assert!(second.data().lexicon.contains("கடை"));
    }

    #[test]
    fn test_empty_line() {
        assert!(analyzer().analyze_line("").is_empty());
    }

    #[test]
    fn test_vocabulary() {
        let analyzer = analyzer();
        let mut vocabulary = Vocabulary::new();
        for word in ["மரக்கடல்", "மரத்தில்", "ஷஜ"] {
            vocabulary.add(&analyzer.segment_word(word));
        }

        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["கடல்", "மரம்"]);
        assert_eq!(vocabulary.to_string(), "{கடல், மரம்}");
        assert_eq!(Vocabulary::new().to_string(), "{}");
    }

    #[test]
    fn test_token_json() {
        let tokens = analyzer().analyze_line("மரம் !");
        let json = serde_json::to_string(&tokens[1]).unwrap();
        assert_eq!(json, r#"{"text":" !","start":12,"len":2,"chunk_type":"Separator"}"#);
    }
}
