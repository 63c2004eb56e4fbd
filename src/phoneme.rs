//! Phoneme inventory for Tamil text.
//!
//! A [`Phoneme`] is one atomic sound unit: a vowel or a consonant. Combining
//! vowel signs and the pulli only exist in the written form; the codec turns
//! them into plain phonemes (see [`crate::codec`]).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The inherent short vowel carried by every consonant
pub const SHORT_A: char = 'அ';

/// The pulli (virama), which cancels a consonant's inherent vowel
pub const PULLI: char = '\u{0BCD}';

/// Independent vowels, in the same order as [`COMBINING_VOWELS`]
pub const INDEPENDENT_VOWELS: [char; 11] =
    ['ஆ', 'இ', 'ஈ', 'உ', 'ஊ', 'எ', 'ஏ', 'ஐ', 'ஒ', 'ஓ', 'ஔ'];

/// Combining vowel signs, in the same order as [`INDEPENDENT_VOWELS`]
pub const COMBINING_VOWELS: [char; 11] = [
    '\u{0BBE}', '\u{0BBF}', '\u{0BC0}', '\u{0BC1}', '\u{0BC2}', '\u{0BC6}', '\u{0BC7}', '\u{0BC8}',
    '\u{0BCA}', '\u{0BCB}', '\u{0BCC}',
];

/// Hard consonants, in the same order as their soft counterparts
pub const VALLINAM: [char; 6] = ['க', 'ச', 'ட', 'த', 'ப', 'ற'];

/// Soft (nasal) consonants, in the same order as their hard counterparts
pub const MELLINAM: [char; 6] = ['ங', 'ஞ', 'ண', 'ந', 'ம', 'ன'];

/// Medial consonants
pub const IDAIYINAM: [char; 6] = ['ய', 'ர', 'ல', 'வ', 'ழ', 'ள'];

/// Borrowed (grantha) consonants
pub const GRANTHA: [char; 5] = ['ஜ', 'ஷ', 'ஸ', 'ஹ', 'ஶ'];

/// Vowels before which a word-initial ய can be a glide inserted by sandhi
const Y_VOWELS: [char; 5] = ['இ', 'ஈ', 'எ', 'ஏ', 'ஐ'];

/// Vowels before which a word-initial வ can be a glide inserted by sandhi
const V_VOWELS: [char; 9] = ['அ', 'ஆ', 'உ', 'ஊ', 'எ', 'ஏ', 'ஒ', 'ஓ', 'ஔ'];

/// Consonants that never start a native word
const INVALID_START: [char; 6] = ['ங', 'ண', 'ழ', 'ள', 'ற', 'ன'];

/// Consonants that never end a valid inflected form (all of vallinam plus ங ஞ ந வ)
const INVALID_END: [char; 10] = ['க', 'ச', 'ட', 'த', 'ப', 'ற', 'ங', 'ஞ', 'ந', 'வ'];

/// Vowels that can act as a demonstrative or distance prefix
const DISTANCE_PREFIXES: [char; 3] = ['அ', 'இ', 'எ'];

static TO_COMBINING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    INDEPENDENT_VOWELS
        .iter()
        .copied()
        .zip(COMBINING_VOWELS.iter().copied())
        .collect()
});

static FROM_COMBINING: Lazy<HashMap<char, char>> = Lazy::new(|| {
    COMBINING_VOWELS
        .iter()
        .copied()
        .zip(INDEPENDENT_VOWELS.iter().copied())
        .collect()
});

/// Manner class of a phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeClass {
    /// அ or one of the independent vowels
    Vowel,
    /// Hard consonant
    Vallinam,
    /// Soft (nasal) consonant
    Mellinam,
    /// Medial consonant
    Idaiyinam,
    /// Borrowed consonant
    Grantha,
    /// Anything outside the Tamil phoneme inventory
    Other,
}

/// A single Tamil phoneme.
///
/// Consonants are stored by their base letter (e.g. `க`), so a consonant in a
/// phoneme sequence is always bare; its vowel, if any, is the next phoneme.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(char);

impl Phoneme {
    pub const A: Phoneme = Phoneme('அ');
    pub const AA: Phoneme = Phoneme('ஆ');
    pub const I: Phoneme = Phoneme('இ');
    pub const II: Phoneme = Phoneme('ஈ');
    pub const U: Phoneme = Phoneme('உ');
    pub const UU: Phoneme = Phoneme('ஊ');
    pub const E: Phoneme = Phoneme('எ');
    pub const EE: Phoneme = Phoneme('ஏ');
    pub const AI: Phoneme = Phoneme('ஐ');
    pub const O: Phoneme = Phoneme('ஒ');
    pub const OO: Phoneme = Phoneme('ஓ');
    pub const AU: Phoneme = Phoneme('ஔ');

    pub const KA: Phoneme = Phoneme('க');
    pub const CA: Phoneme = Phoneme('ச');
    pub const TTA: Phoneme = Phoneme('ட');
    pub const TA: Phoneme = Phoneme('த');
    pub const PA: Phoneme = Phoneme('ப');
    pub const RRA: Phoneme = Phoneme('ற');

    pub const NGA: Phoneme = Phoneme('ங');
    pub const NYA: Phoneme = Phoneme('ஞ');
    pub const NNA: Phoneme = Phoneme('ண');
    pub const NA: Phoneme = Phoneme('ந');
    pub const MA: Phoneme = Phoneme('ம');
    pub const NNNA: Phoneme = Phoneme('ன');

    pub const YA: Phoneme = Phoneme('ய');
    pub const RA: Phoneme = Phoneme('ர');
    pub const LA: Phoneme = Phoneme('ல');
    pub const VA: Phoneme = Phoneme('வ');
    pub const LLLA: Phoneme = Phoneme('ழ');
    pub const LLA: Phoneme = Phoneme('ள');

    /// Wrap a character as a phoneme
    pub const fn new(c: char) -> Self {
        Phoneme(c)
    }

    /// The character this phoneme is written with
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Classify this phoneme
    pub fn class(self) -> PhonemeClass {
        let c = self.0;
        if c == SHORT_A || INDEPENDENT_VOWELS.contains(&c) {
            PhonemeClass::Vowel
        } else if VALLINAM.contains(&c) {
            PhonemeClass::Vallinam
        } else if MELLINAM.contains(&c) {
            PhonemeClass::Mellinam
        } else if IDAIYINAM.contains(&c) {
            PhonemeClass::Idaiyinam
        } else if GRANTHA.contains(&c) {
            PhonemeClass::Grantha
        } else {
            PhonemeClass::Other
        }
    }

    pub fn is_vowel(self) -> bool {
        self.class() == PhonemeClass::Vowel
    }

    /// Native or grantha consonant
    pub fn is_consonant(self) -> bool {
        matches!(
            self.class(),
            PhonemeClass::Vallinam
                | PhonemeClass::Mellinam
                | PhonemeClass::Idaiyinam
                | PhonemeClass::Grantha
        )
    }

    pub fn is_vallinam(self) -> bool {
        self.class() == PhonemeClass::Vallinam
    }

    pub fn is_mellinam(self) -> bool {
        self.class() == PhonemeClass::Mellinam
    }

    /// The nasal paired with a hard consonant (க → ங, ட → ண, ...)
    pub fn soft_counterpart(self) -> Option<Phoneme> {
        VALLINAM
            .iter()
            .position(|&c| c == self.0)
            .map(|i| Phoneme(MELLINAM[i]))
    }

    /// The hard consonant paired with a nasal (ங → க, ம → ப, ...)
    pub fn hard_counterpart(self) -> Option<Phoneme> {
        MELLINAM
            .iter()
            .position(|&c| c == self.0)
            .map(|i| Phoneme(VALLINAM[i]))
    }

    /// The combining sign written for this vowel after a consonant
    pub fn combining_sign(self) -> Option<char> {
        TO_COMBINING.get(&self.0).copied()
    }

    /// Whether this vowel allows a following ய to be a sandhi glide
    pub fn takes_y_glide(self) -> bool {
        Y_VOWELS.contains(&self.0)
    }

    /// Whether this vowel allows a following வ to be a sandhi glide
    pub fn takes_v_glide(self) -> bool {
        V_VOWELS.contains(&self.0)
    }

    pub fn is_invalid_start(self) -> bool {
        INVALID_START.contains(&self.0)
    }

    /// Whether a bare form of this consonant can never end a word
    pub fn is_invalid_end(self) -> bool {
        INVALID_END.contains(&self.0)
    }

    pub fn is_distance_prefix(self) -> bool {
        DISTANCE_PREFIXES.contains(&self.0)
    }
}

/// The independent vowel for a combining vowel sign
pub fn vowel_for_sign(sign: char) -> Option<Phoneme> {
    FROM_COMBINING.get(&sign).copied().map(Phoneme)
}

impl fmt::Debug for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consonant() {
            write!(f, "{}{}", self.0, PULLI)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
