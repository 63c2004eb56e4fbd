//! Closed-class grammatical data: the suffix set and the verb-ending table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::codec::decode;
use crate::error::{Error, Result};
use crate::phoneme::Phoneme;

static DEFAULT_SUFFIXES: &str = include_str!("data/grammatical_suffixes.json");
static DEFAULT_VERB_ENDINGS: &str = include_str!("data/verb_endings.json");

/// Read a JSON file holding an array of strings
pub(crate) fn read_string_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The set of grammatical suffixes (case markers, clitics, tense and person
/// endings) that may follow a word without counting as a word of their own.
#[derive(Debug, Clone)]
pub struct GrammarSet {
    suffixes: HashSet<String>,
}

impl GrammarSet {
    /// Build a suffix set from surface forms
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GrammarSet {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a suffix set from a JSON array of strings
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_string_list(path.as_ref())?))
    }

    pub fn contains(&self, form: &str) -> bool {
        self.suffixes.contains(form)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl Default for GrammarSet {
    fn default() -> Self {
        let suffixes: Vec<String> =
            serde_json::from_str(DEFAULT_SUFFIXES).expect("Invalid built-in suffix list");
        Self::new(suffixes)
    }
}

/// Inflectional endings stripped when recovering a verb root.
///
/// Endings are kept as phoneme sequences; every ending that matches the end
/// of a span is tried.
#[derive(Debug, Clone)]
pub struct VerbEndingTable {
    endings: Vec<Vec<Phoneme>>,
}

impl VerbEndingTable {
    /// Build a table from the surface forms of the endings
    pub fn new<I, S>(endings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        VerbEndingTable {
            endings: endings
                .into_iter()
                .map(|e| decode(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Load a table from a JSON array of surface forms
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_string_list(path.as_ref())?))
    }

    /// Endings that `span` ends with, excluding the whole span itself
    pub fn matching<'a>(&'a self, span: &'a [Phoneme]) -> impl Iterator<Item = &'a [Phoneme]> + 'a {
        self.endings
            .iter()
            .map(Vec::as_slice)
            .filter(move |ending| ending.len() < span.len() && span.ends_with(ending))
    }

    pub fn len(&self) -> usize {
        self.endings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }
}

impl Default for VerbEndingTable {
    fn default() -> Self {
        let endings: Vec<String> =
            serde_json::from_str(DEFAULT_VERB_ENDINGS).expect("Invalid built-in verb ending list");
        Self::new(endings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_suffixes() {
        let grammar = GrammarSet::default();
        assert!(!grammar.is_empty());
        assert!(grammar.contains("இல்"));
        assert!(grammar.contains("கு"));
        assert!(grammar.contains("உம்"));
        assert!(!grammar.contains("மரம்"));
    }

    #[test]
    fn test_default_verb_endings() {
        let table = VerbEndingTable::default();
        assert!(!table.is_empty());
        let span = decode("செய்தான்");
        let matches: Vec<&[Phoneme]> = table.matching(&span).collect();
        assert!(matches.contains(&decode("ஆன்").as_slice()));
    }

    #[test]
    fn test_built_in_lists_parse() {
        let suffixes: Vec<String> = serde_json::from_str(DEFAULT_SUFFIXES).unwrap();
        let unique: HashSet<&String> = suffixes.iter().collect();
        assert_eq!(GrammarSet::default().len(), unique.len());

        let endings: Vec<String> = serde_json::from_str(DEFAULT_VERB_ENDINGS).unwrap();
        assert_eq!(VerbEndingTable::default().len(), endings.len());
    }

    #[test]
    fn test_matching_skips_whole_span() {
        let table = VerbEndingTable::new(["ஆன்"]);
        let span = decode("ஆன்");
        assert_eq!(table.matching(&span).count(), 0);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["ஐ", "ஆல்"]"#).unwrap();

        let grammar = GrammarSet::from_json_file(file.path()).unwrap();
        assert_eq!(grammar.len(), 2);
        assert!(grammar.contains("ஆல்"));
    }

    #[test]
    fn test_malformed_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"a list\"}}").unwrap();

        let err = GrammarSet::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
