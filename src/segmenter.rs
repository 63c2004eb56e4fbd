//! Best-split search over one word.
//!
//! Every cut point is tried from the longest prefix down. A prefix is kept if
//! one of its sandhi variations is a grammatical suffix or a dictionary word;
//! the rest of the word is then split the same way. Among all splits the one
//! covering the most phonemes wins, and ties go to the split using fewer
//! dictionary words. Suffixes are free, so `மரத்தில்` prefers `மரம்` + `இல்`
//! over any reading with two words.

use crate::entry::{Entry, SplitResult};
use crate::lexicon::Lexicon;
use crate::phoneme::Phoneme;
use crate::reference::ReferenceData;
use crate::sandhi::VariationGenerator;
use crate::validity::is_invalid_split_boundary;

/// Results already computed for each start offset of the word.
///
/// Entries are stored last-part-first, the order the search builds them in.
#[derive(Debug, Default)]
struct SearchCache {
    slots: Vec<Option<SplitResult>>,
}

impl SearchCache {
    fn new(len: usize) -> Self {
        SearchCache {
            slots: vec![None; len + 1],
        }
    }

    fn get(&self, start: usize) -> Option<&SplitResult> {
        self.slots.get(start).and_then(Option::as_ref)
    }

    fn insert(&mut self, start: usize, result: SplitResult) {
        if let Some(slot) = self.slots.get_mut(start) {
            *slot = Some(result);
        }
    }
}

/// Search state for a single word
pub struct Segmenter<'a, L> {
    data: &'a ReferenceData<L>,
    generator: VariationGenerator<'a>,
    word: &'a [Phoneme],
    right: Option<Phoneme>,
    cache: SearchCache,
}

impl<'a, L: Lexicon> Segmenter<'a, L> {
    /// Prepare a search over `word`, which is followed by `right` in the text
    pub fn new(data: &'a ReferenceData<L>, word: &'a [Phoneme], right: Option<Phoneme>) -> Self {
        Segmenter {
            data,
            generator: VariationGenerator::new(&data.verb_endings),
            word,
            right,
            cache: SearchCache::new(word.len()),
        }
    }

    /// Find the best split of the word, which follows `left` in the text.
    pub fn search(mut self, left: Option<Phoneme>) -> SplitResult {
        // A hard consonant or ங ஞ ந வ can't end the previous word, so it
        // says nothing about sandhi at this word's start.
        let left = left.filter(|p| !(p.is_consonant() && p.is_invalid_end()));

        let mut result = self.best_from(0, left);
        result.entries.reverse();
        result
    }

    fn best_from(&mut self, start: usize, prev: Option<Phoneme>) -> SplitResult {
        let word = self.word;
        let len = word.len();
        if start >= len {
            return SplitResult::empty();
        }

        // Offset 0 is not cached: its left context comes from outside the word
        if start > 0 {
            if let Some(hit) = self.cache.get(start) {
                return hit.clone();
            }
        }

        let mut best = SplitResult {
            coverage: 0,
            word_count: 1,
            entries: vec![Entry::unresolved(word[start..].to_vec())],
        };

        for cut in (start + 1..=len).rev() {
            let tail = &word[cut..];
            if is_invalid_split_boundary(tail) {
                continue;
            }

            let prefix = &word[start..cut];
            let next = tail.first().copied().or(self.right);
            let Some((form, grammatical)) = self.resolve(prefix, start > 0, prev, next) else {
                continue;
            };

            let rest = self.best_from(cut, prefix.last().copied());

            let coverage = rest.coverage + prefix.len();
            if coverage < best.coverage {
                continue;
            }

            let word_count = rest.word_count + usize::from(!grammatical);
            if coverage == best.coverage && word_count >= best.word_count {
                continue;
            }

            let mut entries = rest.entries;
            match entries.last_mut() {
                // Fold a following suffix into this part
                Some(head) if head.grammatical => {
                    let mut raw = prefix.to_vec();
                    raw.extend_from_slice(&head.raw);
                    *head = Entry::resolved(raw, form, grammatical);
                }
                _ => entries.push(Entry::resolved(prefix.to_vec(), form, grammatical)),
            }

            best = SplitResult {
                coverage,
                word_count,
                entries,
            };

            if word_count == 0 && coverage == len - start {
                break;
            }
        }

        if start > 0 {
            self.cache.insert(start, best.clone());
        }
        best
    }

    /// The form `prefix` matches, and whether it is a grammatical suffix.
    ///
    /// Suffixes are tried first, but never for the first part of a word.
    fn resolve(
        &self,
        prefix: &[Phoneme],
        allow_suffix: bool,
        prev: Option<Phoneme>,
        next: Option<Phoneme>,
    ) -> Option<(String, bool)> {
        let forms = self.generator.variations(prefix, prev, next);

        if allow_suffix {
            if let Some(form) = forms.iter().find(|f| self.data.grammar.contains(f)) {
                return Some((form.clone(), true));
            }
        }

        forms
            .into_iter()
            .find(|f| self.data.lexicon.contains(f))
            .map(|form| (form, false))
    }
}
