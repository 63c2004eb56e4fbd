//! Conversion between written Tamil and phoneme sequences.
//!
//! Decoding splits every consonant-vowel syllable into its consonant and its
//! vowel, so `கா` becomes `க` + `ஆ` and `க்` becomes a lone `க`. Encoding
//! reverses this, writing vowels after consonants as combining signs.

use unicode_normalization::UnicodeNormalization;

use crate::phoneme::{vowel_for_sign, Phoneme, PULLI, SHORT_A};

/// Decode written Tamil into phonemes.
///
/// The text is NFC-normalized first. Characters outside the Tamil inventory are
/// kept as phonemes of their own.
pub fn decode(text: &str) -> Vec<Phoneme> {
    let mut phonemes: Vec<Phoneme> = Vec::with_capacity(text.len());

    for c in text.nfc() {
        if c == PULLI {
            phonemes.pop();
        } else if let Some(vowel) = vowel_for_sign(c) {
            phonemes.pop();
            phonemes.push(vowel);
        } else {
            let phoneme = Phoneme::new(c);
            phonemes.push(phoneme);
            if phoneme.is_consonant() {
                phonemes.push(Phoneme::A);
            }
        }
    }

    phonemes
}

/// Encode phonemes back into written Tamil.
pub fn encode(phonemes: &[Phoneme]) -> String {
    let mut written: Vec<char> = Vec::with_capacity(phonemes.len() * 2);

    for &phoneme in phonemes {
        if written.last() == Some(&PULLI) {
            if phoneme.as_char() == SHORT_A {
                written.pop();
                continue;
            }
            if let Some(sign) = phoneme.combining_sign() {
                written.pop();
                written.push(sign);
                continue;
            }
        }

        written.push(phoneme.as_char());
        if phoneme.is_consonant() {
            written.push(PULLI);
        }
    }

    written.into_iter().collect::<String>().trim().to_string()
}
