//! Sandhi variation generation.
//!
//! When two words meet, the sounds at the junction change: consonants double,
//! nasals assimilate, glides are inserted between vowels, and so on. Given a
//! span of phonemes as it appears in running text, this module works backwards
//! and lists every spelling the span could have had before those changes, so
//! each one can be looked up in the dictionary.

use std::collections::HashSet;

use crate::codec::encode;
use crate::grammar::VerbEndingTable;
use crate::phoneme::Phoneme as P;
use crate::phoneme::Phoneme;
use crate::validity::is_valid;

/// Present tense markers (க்கின்ற், க்கிற், கின்ற், கிற்), longest first
const PRESENT_MARKERS: [&[Phoneme]; 4] = [
    &[P::KA, P::KA, P::I, P::NNNA, P::RRA],
    &[P::KA, P::KA, P::I, P::RRA],
    &[P::KA, P::I, P::NNNA, P::RRA],
    &[P::KA, P::I, P::RRA],
];

fn joined(head: &[Phoneme], tail: &[Phoneme]) -> Vec<Phoneme> {
    let mut out = Vec::with_capacity(head.len() + tail.len());
    out.extend_from_slice(head);
    out.extend_from_slice(tail);
    out
}

/// Generates the pre-sandhi spellings of phoneme spans
#[derive(Debug, Clone, Copy)]
pub struct VariationGenerator<'a> {
    verb_endings: &'a VerbEndingTable,
}

impl<'a> VariationGenerator<'a> {
    pub fn new(verb_endings: &'a VerbEndingTable) -> Self {
        VariationGenerator { verb_endings }
    }

    /// All written forms `span` could stand for, given the phoneme before it
    /// (`prev`) and the phoneme after it (`next`) in the text.
    ///
    /// The span itself comes first when it is valid on its own. Forms that
    /// fail [`is_valid`] are dropped.
    pub fn variations(
        &self,
        span: &[Phoneme],
        prev: Option<Phoneme>,
        next: Option<Phoneme>,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut forms = Vec::new();

        for start in starting_variations(span, prev) {
            let candidates = ending_variations(&start, next)
                .into_iter()
                .chain(verb_root_variations(&start, self.verb_endings));

            for candidate in candidates {
                if !is_valid(&candidate) {
                    continue;
                }
                let form = encode(&candidate);
                if seen.insert(form.clone()) {
                    forms.push(form);
                }
            }
        }

        forms
    }
}

/// Variations of the end of `word` when it is followed by `next`.
pub fn ending_variations(word: &[Phoneme], next: Option<Phoneme>) -> Vec<Vec<Phoneme>> {
    let Some((&last, stem)) = word.split_last() else {
        return Vec::new();
    };
    let n = word.len();
    let mut variations = vec![word.to_vec()];

    if last == P::A {
        // மர → மரம், மரன்
        variations.push(joined(word, &[P::MA]));
        variations.push(joined(word, &[P::NNNA]));
    } else if last == P::AA {
        variations.push(joined(stem, &[P::A, P::NNNA]));
    } else if last == P::RA {
        variations.push(joined(stem, &[P::NNNA]));
    } else if word.ends_with(&[P::TTA, P::TTA, P::U]) || word.ends_with(&[P::RRA, P::RRA, P::U]) {
        // வீட்டு → வீடு
        variations.push(joined(&word[..n - 2], &[P::U]));
    } else if word.ends_with(&[P::A, P::TA, P::TA, P::U]) {
        // மரத்து → மரம்
        variations.push(joined(&word[..n - 3], &[P::MA]));
    }

    if word.ends_with(&[P::I, P::YA, P::A]) {
        // பெரிய → பெருமை, பெரு
        let base = &word[..n - 3];
        variations.push(joined(base, &[P::U, P::MA, P::AI]));
        variations.push(joined(base, &[P::U]));
    } else if last.is_mellinam() {
        let after_u = n > 2 && word[n - 2] == P::U;
        if last == P::MA {
            if after_u {
                variations.push(joined(word, &[P::AI]));
            }
        } else if Some(last) == next || last.hard_counterpart() == next {
            variations.push(joined(stem, &[P::MA]));
            if after_u {
                variations.push(joined(stem, &[P::MA, P::AI]));
            }
        }
    }

    let Some(next) = next else {
        return variations;
    };

    if next.is_vallinam() {
        if last.is_vallinam() {
            if last == P::TTA {
                variations.push(joined(stem, &[P::LLA]));
            } else if last == P::RRA {
                variations.push(joined(stem, &[P::NNNA]));
                variations.push(joined(stem, &[P::LA]));
            }
            // Doubled hard consonant: try again without the copy
            if last == next {
                variations.extend(ending_variations(stem, Some(next)));
            }
        } else if last == P::NNA {
            variations.push(joined(stem, &[P::LLA]));
        } else if last == P::NNNA {
            variations.push(joined(stem, &[P::LA]));
        }
    } else if next.is_mellinam() {
        if last == P::NNA {
            variations.push(joined(stem, &[P::LLA]));
        } else if last == P::NNNA {
            variations.push(joined(stem, &[P::LA]));
        }
    } else if next.is_vowel() && last.is_consonant() {
        // நாட் + vowel → நாடு
        variations.extend(ending_variations(&joined(word, &[P::U]), Some(next)));
    }

    variations
}

/// Variations of the start of `word` when it follows `prev`.
pub fn starting_variations(word: &[Phoneme], prev: Option<Phoneme>) -> Vec<Vec<Phoneme>> {
    let Some((&first, rest)) = word.split_first() else {
        return Vec::new();
    };
    let mut variations = vec![word.to_vec()];

    let second = word.get(1).copied();
    if first == P::I && (second == Some(P::RA) || second == Some(P::LA)) {
        variations.push(rest.to_vec());
    } else if let Some(prev) = prev {
        if first == P::YA && prev.takes_y_glide() {
            variations.push(rest.to_vec());
        } else if first == P::VA && prev.takes_v_glide() {
            variations.push(rest.to_vec());
        } else if first == prev {
            if first.is_vallinam() {
                if first == P::TTA || first == P::RRA {
                    variations.push(joined(&[P::TA], rest));
                }
            } else {
                variations.push(rest.to_vec());
                if first.is_mellinam() {
                    variations.push(joined(&[P::NA], rest));
                }
            }
        } else if first.is_vallinam() && first.soft_counterpart() == Some(prev) {
            variations.push(joined(&[P::TA], rest));
        }
    }

    if first.is_distance_prefix() && word.len() > 3 {
        let (second, third, fourth) = (word[1], word[2], word[3]);
        if second.is_consonant() && third == second {
            // அக்கடை → கடை, இவ்வூர் → வூர், ஊர்
            variations.extend(starting_variations(&word[2..], None));
            if second == P::VA && fourth.is_vowel() {
                variations.extend(starting_variations(&word[3..], None));
            }
        } else if second == P::VA && third == P::YA && fourth.is_vowel() {
            variations.extend(starting_variations(&word[2..], None));
        }
    }

    variations
}

/// Verb roots `word` could be an inflected form of, with `word` itself first.
pub fn verb_root_variations(word: &[Phoneme], endings: &VerbEndingTable) -> Vec<Vec<Phoneme>> {
    let mut variations = vec![word.to_vec()];

    for ending in endings.matching(word) {
        let rest = &word[..word.len() - ending.len()];
        for root in recover_roots(rest) {
            if let Some(lateral) = lateral_variant(&root) {
                variations.push(lateral);
            }
            variations.push(root);
        }
    }

    variations
}

/// Strip the tense marker from what is left of a verb once its ending is gone.
fn recover_roots(rest: &[Phoneme]) -> Vec<Vec<Phoneme>> {
    let n = rest.len();
    let mut roots = Vec::new();

    match rest {
        // நடந்த் → நட, படித்த் → படி
        [.., before, P::TA] if *before == P::NA || *before == P::TA => {
            roots.push(rest[..n - 2].to_vec());
        }
        // செய்த் → செய்
        [.., before, P::TA] if before.is_consonant() => {
            roots.push(rest[..n - 1].to_vec());
        }
        // ஓடின் → ஓடு
        [.., P::I, P::NNNA] => {
            roots.push(joined(&rest[..n - 2], &[P::U]));
        }
        // படிப்ப் → படி
        [.., P::PA, P::PA] => {
            roots.push(rest[..n - 2].to_vec());
        }
        // வருவ் → வரு
        [.., before, P::VA] if before.is_vowel() => {
            roots.push(rest[..n - 1].to_vec());
        }
        // கேட்ட் → கேட், விட்ட் → விடு
        [.., a, b] if a == b && (*a == P::TTA || *a == P::RRA) => {
            roots.push(rest[..n - 1].to_vec());
            roots.push(joined(&rest[..n - 1], &[P::U]));
        }
        // ஆண்ட் → ஆள்
        [.., P::NNA, P::TTA] => {
            roots.push(joined(&rest[..n - 2], &[P::LLA]));
        }
        // நின்ற் → நில்
        [.., P::NNNA, P::RRA] => {
            roots.push(joined(&rest[..n - 2], &[P::LA]));
        }
        _ => {}
    }

    for marker in PRESENT_MARKERS {
        if n > marker.len() && rest.ends_with(marker) {
            roots.push(rest[..n - marker.len()].to_vec());
        }
    }

    roots
}

/// ட → ள and ற → ல at the end of a recovered root
fn lateral_variant(root: &[Phoneme]) -> Option<Vec<Phoneme>> {
    let (&last, stem) = root.split_last()?;
    let lateral = if last == P::TTA {
        P::LLA
    } else if last == P::RRA {
        P::LA
    } else {
        return None;
    };
    Some(joined(stem, &[lateral]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    fn forms(text: &str, prev: Option<Phoneme>, next: Option<Phoneme>) -> Vec<String> {
        let endings = VerbEndingTable::default();
        VariationGenerator::new(&endings).variations(&decode(text), prev, next)
    }

    #[test]
    fn test_empty_span() {
        assert!(forms("", None, None).is_empty());
        assert!(ending_variations(&[], None).is_empty());
        assert!(starting_variations(&[], None).is_empty());
    }

    #[test]
    fn test_span_itself_comes_first() {
        let found = forms("மரம்", None, None);
        assert_eq!(found[0], "மரம்");
    }

    #[test]
    fn test_invalid_forms_dropped() {
        // மரக் ends in a hard consonant and can't stand alone
        let found = forms("மரக்", None, None);
        assert!(!found.contains(&"மரக்".to_string()));
    }

    #[test]
    fn test_final_short_vowel_takes_nasal() {
        let found = forms("மர", None, None);
        assert!(found.contains(&"மரம்".to_string()));
        assert!(found.contains(&"மரன்".to_string()));
    }

    #[test]
    fn test_final_long_vowel() {
        assert!(forms("தலைவா", None, None).contains(&"தலைவன்".to_string()));
    }

    #[test]
    fn test_attu_augment() {
        assert!(forms("மரத்து", None, None).contains(&"மரம்".to_string()));
        assert!(forms("வீட்டு", None, None).contains(&"வீடு".to_string()));
    }

    #[test]
    fn test_iya_ending() {
        let found = forms("பெரிய", None, None);
        assert!(found.contains(&"பெருமை".to_string()));
        assert!(found.contains(&"பெரு".to_string()));
    }

    #[test]
    fn test_geminate_simplification() {
        let found = forms("மரக்", None, Some(P::KA));
        assert!(found.contains(&"மர".to_string()));
        assert!(found.contains(&"மரம்".to_string()));
    }

    #[test]
    fn test_nasal_assimilation() {
        // மரங் before க comes from மரம்
        assert!(forms("மரங்", None, Some(P::KA)).contains(&"மரம்".to_string()));
        assert!(!forms("மரங்", None, Some(P::YA)).contains(&"மரம்".to_string()));
    }

    #[test]
    fn test_stop_to_lateral_before_hard_consonant() {
        let found = forms("கற்", None, Some(P::KA));
        assert!(found.contains(&"கல்".to_string()));
        assert!(found.contains(&"கன்".to_string()));

        let found = ending_variations(&decode("கண்"), Some(P::KA));
        assert!(found.contains(&decode("கள்")));
    }

    #[test]
    fn test_final_ra_takes_nasal() {
        let found = forms("ஊர்", None, None);
        assert_eq!(found[0], "ஊர்");
        assert!(found.contains(&"ஊன்".to_string()));
    }

    #[test]
    fn test_nasal_to_lateral() {
        // before a nasal
        let found = ending_variations(&decode("கண்"), Some(P::MA));
        assert!(found.contains(&decode("கள்")));
        let found = ending_variations(&decode("கன்"), Some(P::MA));
        assert!(found.contains(&decode("கல்")));

        // before a hard consonant
        let found = ending_variations(&decode("கன்"), Some(P::KA));
        assert!(found.contains(&decode("கல்")));
    }

    #[test]
    fn test_enunciative_u_before_vowel() {
        assert!(forms("நாட்", None, Some(P::A)).contains(&"நாடு".to_string()));
    }

    #[test]
    fn test_glide_dropped_after_vowel() {
        let found = starting_variations(&decode("யானை"), Some(P::I));
        assert!(found.contains(&decode("ஆனை")));

        let found = starting_variations(&decode("வும்"), Some(P::A));
        assert!(found.contains(&decode("உம்")));

        // ய is not a glide after a back vowel
        let found = starting_variations(&decode("யானை"), Some(P::U));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_initial_i_before_liquid() {
        let found = starting_variations(&decode("இலை"), None);
        assert!(found.contains(&decode("லை")));
    }

    #[test]
    fn test_doubled_initial_consonant() {
        let found = starting_variations(&decode("டான்"), Some(P::TTA));
        assert!(found.contains(&decode("தான்")));

        let found = starting_variations(&decode("மகன்"), Some(P::MA));
        assert!(found.contains(&decode("அகன்")));
        assert!(found.contains(&decode("நகன்")));
    }

    #[test]
    fn test_distance_prefix() {
        assert!(forms("அக்கடை", None, None).contains(&"கடை".to_string()));

        let found = forms("இவ்வூர்", None, None);
        assert!(found.contains(&"ஊர்".to_string()));

        // அவ் before a ய-initial word
        assert!(forms("அவ்யானை", None, None).contains(&"யானை".to_string()));
    }

    #[test]
    fn test_verb_roots() {
        let cases = [
            ("செய்தான்", "செய்"),
            ("நடந்தான்", "நட"),
            ("படித்தான்", "படி"),
            ("ஓடினான்", "ஓடு"),
            ("கேட்டான்", "கேள்"),
            ("விட்டான்", "விடு"),
            ("படிக்கிறான்", "படி"),
            ("செல்கிறான்", "செல்"),
            ("படிக்கின்றான்", "படி"),
            ("செல்கின்றான்", "செல்"),
            ("நின்றான்", "நில்"),
            ("ஆண்டான்", "ஆள்"),
            ("வருவான்", "வரு"),
            ("படிப்பான்", "படி"),
            ("செய்த", "செய்"),
        ];
        for (inflected, root) in cases {
            let found = forms(inflected, None, None);
            assert!(found.contains(&root.to_string()), "{} should yield {}, got {:?}", inflected, root, found);
        }
    }

    #[test]
    fn test_verb_roots_keep_original() {
        let endings = VerbEndingTable::default();
        let word = decode("செய்தான்");
        let found = verb_root_variations(&word, &endings);
        assert_eq!(found[0], word);
    }
}
