//! Splitting lines into Tamil words and separators.
//!
//! Each Tamil word also gets the phonemes next to it in the text, which the
//! segmenter needs for sandhi at the word's edges. Context only carries across
//! plain whitespace; punctuation or foreign text between two words breaks it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::codec::decode;
use crate::phoneme::Phoneme;

/// A run of characters from the Tamil Unicode block, with any ZWNJ or ZWJ
/// written inside the word
static TAMIL_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{0B80}-\u{0BFF}][\u{0B80}-\u{0BFF}\u{200C}\u{200D}]*").expect("Invalid regex")
});

/// The type of chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChunkType {
    /// A Tamil word
    Tamil,
    /// Anything between Tamil words
    Separator,
}

/// A chunk of a line with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub chunk_type: ChunkType,
    /// Starting byte offset in the line
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Chunk {
    fn new(text: &str, chunk_type: ChunkType, start: usize) -> Self {
        Chunk {
            text: text.to_string(),
            chunk_type,
            start,
            len: text.len(),
        }
    }

    pub fn is_word(&self) -> bool {
        self.chunk_type == ChunkType::Tamil
    }

    /// Whether sandhi context can cross this chunk
    fn is_blank(&self) -> bool {
        self.chunk_type == ChunkType::Separator && self.text.chars().all(char::is_whitespace)
    }
}

/// A Tamil word ready for segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Index of the word's chunk
    pub chunk: usize,
    pub phonemes: Vec<Phoneme>,
    /// Last phoneme of the previous word, if only whitespace lies between
    pub left: Option<Phoneme>,
    /// First phoneme of the next word, if only whitespace lies between
    pub right: Option<Phoneme>,
}

/// Chunker for one line of text
pub struct Chunker<'t> {
    text: &'t str,
}

impl<'t> Chunker<'t> {
    pub fn new(text: &'t str) -> Self {
        Chunker { text }
    }

    /// Split the line into alternating word and separator chunks
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut last_end = 0;

        for m in TAMIL_RUN.find_iter(self.text) {
            if m.start() > last_end {
                chunks.push(Chunk::new(
                    &self.text[last_end..m.start()],
                    ChunkType::Separator,
                    last_end,
                ));
            }
            chunks.push(Chunk::new(m.as_str(), ChunkType::Tamil, m.start()));
            last_end = m.end();
        }

        if last_end < self.text.len() {
            chunks.push(Chunk::new(&self.text[last_end..], ChunkType::Separator, last_end));
        }

        chunks
    }
}

/// Decode the Tamil chunks and attach their neighbouring phonemes
pub fn words(chunks: &[Chunk]) -> Vec<Word> {
    let decoded: Vec<Option<Vec<Phoneme>>> = chunks
        .iter()
        .map(|c| c.is_word().then(|| decode(&c.text)))
        .collect();

    // The word two chunks away, if a blank separator is all that's between
    let neighbour = |across: Option<usize>, word: Option<usize>| {
        let (across, word) = (across?, word?);
        if chunks.get(across)?.is_blank() {
            decoded.get(word)?.as_ref()
        } else {
            None
        }
    };

    let mut found = Vec::new();
    for (i, phonemes) in decoded.iter().enumerate() {
        let Some(phonemes) = phonemes else {
            continue;
        };
        let left = neighbour(i.checked_sub(1), i.checked_sub(2)).and_then(|p| p.last().copied());
        let right = neighbour(Some(i + 1), Some(i + 2)).and_then(|p| p.first().copied());

        found.push(Word {
            chunk: i,
            phonemes: phonemes.clone(),
            left,
            right,
        });
    }

    found
}
