//! Reference data shared by every word search in a run.

use crate::entry::SplitResult;
use crate::grammar::{GrammarSet, VerbEndingTable};
use crate::lexicon::Lexicon;
use crate::phoneme::Phoneme;
use crate::segmenter::Segmenter;

/// The lexicon, suffix set and verb-ending table used for segmentation.
///
/// Nothing here changes during a run apart from the lexicon's own cache.
#[derive(Debug)]
pub struct ReferenceData<L> {
    pub lexicon: L,
    pub grammar: GrammarSet,
    pub verb_endings: VerbEndingTable,
}

impl<L: Lexicon> ReferenceData<L> {
    /// Use `lexicon` with the built-in suffix set and verb endings
    pub fn new(lexicon: L) -> Self {
        ReferenceData {
            lexicon,
            grammar: GrammarSet::default(),
            verb_endings: VerbEndingTable::default(),
        }
    }

    pub fn with_grammar(mut self, grammar: GrammarSet) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_verb_endings(mut self, verb_endings: VerbEndingTable) -> Self {
        self.verb_endings = verb_endings;
        self
    }

    /// Segment one word given the phonemes around it
    pub fn search(
        &self,
        word: &[Phoneme],
        left: Option<Phoneme>,
        right: Option<Phoneme>,
    ) -> SplitResult {
        Segmenter::new(self, word, right).search(left)
    }
}
