//! Downloading and caching of dictionary headwords.
//!
//! Headwords are fetched one initial letter at a time from the DSAL
//! Fabricius Tamil–English dictionary and stored as `<letter>.json` files so
//! later runs work offline.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::grammar::read_string_list;

/// Query endpoint of the Fabricius dictionary
pub const DEFAULT_ENDPOINT: &str = "https://dsal.uchicago.edu/cgi-bin/app/fabricius_query.py";

/// Settings for [`crate::lexicon::CachedLexicon`]
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Directory holding one `<letter>.json` file per initial letter
    pub cache_dir: PathBuf,
    /// Dictionary query URL
    pub endpoint: String,
    /// HTTP timeout for one letter download
    pub timeout: Duration,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            cache_dir: default_cache_dir(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl LexiconConfig {
    /// Default settings with a different cache directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        LexiconConfig {
            cache_dir: cache_dir.into(),
            ..Default::default()
        }
    }
}

/// Get the default cache directory.
/// Returns <data dir>/tamil-sandhi/words, or ./words when there is none.
pub fn default_cache_dir() -> PathBuf {
    #[cfg(feature = "download")]
    {
        dirs::data_dir()
            .map(|dir| dir.join("tamil-sandhi").join("words"))
            .unwrap_or_else(|| PathBuf::from("words"))
    }
    #[cfg(not(feature = "download"))]
    {
        PathBuf::from("words")
    }
}

/// Path of the cache file for one initial letter
pub fn letter_cache_path(cache_dir: &Path, letter: char) -> PathBuf {
    cache_dir.join(format!("{}.json", letter))
}

/// Read a cached headword file
pub fn read_cached(path: &Path) -> Result<HashSet<String>> {
    Ok(read_string_list(path)?.into_iter().collect())
}

/// Write a headword file, creating the cache directory if needed
pub fn write_cache(path: &Path, words: &HashSet<String>) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort();
    let json = serde_json::to_string(&sorted).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Deserialize)]
struct Headword {
    hw: String,
}

/// Parse a dictionary response.
///
/// The service answers with a preamble line followed by a JSON array of
/// entries on the second line; only the `hw` field of each entry is kept.
pub fn parse_response(body: &str) -> Result<HashSet<String>> {
    let line = body
        .lines()
        .nth(1)
        .ok_or_else(|| Error::Response("missing headword line".into()))?;

    let headwords: Vec<Headword> =
        serde_json::from_str(line).map_err(|e| Error::Response(e.to_string()))?;

    Ok(headwords.into_iter().map(|h| h.hw).collect())
}

/// Download every headword starting with `letter`
#[cfg(feature = "download")]
pub fn fetch_headwords(config: &LexiconConfig, letter: char) -> Result<HashSet<String>> {
    eprintln!("[INFO] Downloading list of '{}' words...", letter);

    let client = reqwest::blocking::Client::builder()
        .user_agent("tamil-sandhi")
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let response = client
        .get(&config.endpoint)
        .query(&[
            ("format", "json"),
            ("searchhws", "yes"),
            ("qs", letter.to_string().as_str()),
        ])
        .send()
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "Dictionary query returned status: {}",
            response.status()
        )));
    }

    let body = response.text().map_err(|e| Error::Network(e.to_string()))?;
    let words = parse_response(&body)?;

    eprintln!("[INFO] Got {} '{}' words", words.len(), letter);
    Ok(words)
}
