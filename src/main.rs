//! Command-line interface for tamil-sandhi
//!
//! Usage:
//!   tamil-split [OPTIONS] <TEXT>
//!   echo "அவன் வீட்டுக்குப் போனான்" | tamil-split -w words.json

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tamil_sandhi::{
    Analyzer, CachedLexicon, GrammarSet, Lexicon, LexiconConfig, ReferenceData, Result,
    VerbEndingTable, Vocabulary, WordList,
};

#[derive(Parser)]
#[command(name = "tamil-split")]
#[command(about = "Split Tamil words into dictionary words and suffixes")]
#[command(version)]
struct Cli {
    /// Text to segment; read from stdin until an empty line if omitted
    text: Option<String>,

    /// JSON word list to use instead of the online dictionary
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Directory holding the per-letter dictionary cache
    #[arg(short, long)]
    cache_dir: Option<PathBuf>,

    /// JSON list of grammatical suffixes
    #[arg(short = 'g', long)]
    suffixes: Option<PathBuf>,

    /// JSON list of verb endings
    #[arg(short, long)]
    endings: Option<PathBuf>,

    /// Output one JSON object per word
    #[arg(short, long)]
    json: bool,

    /// Don't print the vocabulary at the end
    #[arg(long)]
    no_vocab: bool,
}

fn load_reference_data(cli: &Cli) -> Result<ReferenceData<Box<dyn Lexicon>>> {
    let lexicon: Box<dyn Lexicon> = match cli.words {
        Some(ref path) => {
            let words = WordList::from_json_file(path)?;
            eprintln!("[INFO] Loaded {} words from {}", words.len(), path.display());
            Box::new(words)
        }
        None => {
            let config = match cli.cache_dir {
                Some(ref dir) => LexiconConfig::with_cache_dir(dir),
                None => LexiconConfig::default(),
            };
            Box::new(CachedLexicon::new(config))
        }
    };

    let mut data = ReferenceData::new(lexicon);
    if let Some(ref path) = cli.suffixes {
        data = data.with_grammar(GrammarSet::from_json_file(path)?);
    }
    if let Some(ref path) = cli.endings {
        data = data.with_verb_endings(VerbEndingTable::from_json_file(path)?);
    }
    Ok(data)
}

fn read_lines(text: Option<String>) -> Result<Vec<String>> {
    if let Some(text) = text {
        return Ok(text.lines().map(str::to_string).collect());
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn run(cli: Cli) -> Result<()> {
    let analyzer = Analyzer::new(load_reference_data(&cli)?);
    let lines = read_lines(cli.text.clone())?;

    let mut vocabulary = Vocabulary::new();
    for line in &lines {
        for token in analyzer.analyze_line(line) {
            let Some(ref split) = token.split else {
                continue;
            };
            vocabulary.add(split);

            if cli.json {
                match serde_json::to_string(&token) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("[WARN] Could not serialize '{}': {}", token.text, e),
                }
            } else {
                println!("{}\t{}", token.text, split);
            }
        }
    }

    if !cli.no_vocab {
        if cli.json {
            match serde_json::to_string(&vocabulary) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("[WARN] Could not serialize vocabulary: {}", e),
            }
        } else {
            println!("{}", vocabulary);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
