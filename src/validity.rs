//! Phonotactic checks on phoneme spans.

use crate::phoneme::Phoneme;

/// Whether a cut placed just before `tail` would leave a bare consonant at
/// the start of the tail.
///
/// A consonant at a split boundary must keep its vowel; `க்` followed by
/// another consonant (or by nothing) is never the start of a word.
pub fn is_invalid_split_boundary(tail: &[Phoneme]) -> bool {
    match tail {
        [first] => first.is_consonant(),
        [first, second, ..] => first.is_consonant() && second.is_consonant(),
        [] => false,
    }
}

/// Whether `span` could be a complete word or suffix on its own.
pub fn is_valid(span: &[Phoneme]) -> bool {
    let (Some(&first), Some(&last)) = (span.first(), span.last()) else {
        return false;
    };

    if is_invalid_split_boundary(span) || first.is_invalid_start() {
        return false;
    }

    if let [.., before_last, _] = span {
        if before_last.is_consonant() && last.is_consonant() {
            return false;
        }
    }

    !last.is_invalid_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    fn p(chars: &str) -> Vec<Phoneme> {
        chars.chars().map(Phoneme::new).collect()
    }

    #[test]
    fn test_split_boundary() {
        assert!(!is_invalid_split_boundary(&[]));
        assert!(is_invalid_split_boundary(&p("க")));
        assert!(is_invalid_split_boundary(&p("ககஉ")));
        assert!(!is_invalid_split_boundary(&p("கஉ")));
        assert!(!is_invalid_split_boundary(&p("இல")));
    }

    #[test]
    fn test_rejects_empty_and_bare_consonants() {
        assert!(!is_valid(&[]));
        for c in ['க', 'ம', 'ய', 'ஜ'] {
            assert!(!is_valid(&[Phoneme::new(c)]), "bare {}", c);
        }
        assert!(!is_valid(&p("கசஅ")));
    }

    #[test]
    fn test_rejects_invalid_start() {
        assert!(!is_valid(&decode("னக")));
        assert!(!is_valid(&decode("ழை")));
        assert!(is_valid(&decode("மரம்")));
    }

    #[test]
    fn test_rejects_final_cluster() {
        assert!(!is_valid(&p("அரம")));
        assert!(!is_valid(&decode("பார்ம்")));
    }

    #[test]
    fn test_rejects_invalid_end() {
        assert!(!is_valid(&decode("மரக்")));
        assert!(!is_valid(&decode("அவ்")));
        assert!(is_valid(&decode("அவன்")));
        assert!(is_valid(&decode("கல்")));
        assert!(is_valid(&decode("செய்")));
    }

    #[test]
    fn test_single_vowel_is_valid() {
        assert!(is_valid(&p("உ")));
        assert!(is_valid(&p("ஐ")));
    }
}
