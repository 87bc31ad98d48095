//! Anagrams - CLI
//!
//! Query an anagram word list: exact anagrams, one-more-letter anagrams,
//! starter words, and a playability survey of the list.

use anagrams::{
    commands::{MatchRule, extend_word, lookup_word, pick_starters, run_survey},
    dictionary::{AnagramDictionary, DEFAULT_MAX_ATTEMPTS, DictionaryConfig, MIN_NUM_ANAGRAMS},
    output::{
        print_extend_result, print_lookup_result, print_starter_picks, print_stats,
        print_survey_result,
    },
    wordlists::{load_from_file, load_from_stdin},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "anagrams",
    about = "Anagram index with one-more-letter lookup and starter word selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line ('-' reads standard input)
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "ANAGRAMS_WORDS",
        default_value = "words.txt"
    )]
    words: PathBuf,

    /// Seed for starter word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Minimum one-more-letter anagrams a starter word needs
    #[arg(short = 'm', long, global = true, default_value_t = MIN_NUM_ANAGRAMS)]
    min_anagrams: usize,

    /// Sampling budget per starter pick (0 retries forever)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List the exact anagrams of a word
    Lookup {
        /// Word to look up
        word: String,

        /// Base word the anagrams must not contain
        #[arg(short, long)]
        base: Option<String>,
    },

    /// List the one-more-letter anagrams of a word
    Extend {
        /// Base word
        word: String,

        /// Require exactly one extra letter instead of the substring rule
        #[arg(long)]
        strict: bool,
    },

    /// Pick starter words, cycling through word lengths
    Starter {
        /// Number of words to pick
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Check every starter length has a qualifying word
    Survey {
        /// Qualifying words to show per length
        #[arg(long, default_value = "5")]
        sample: usize,
    },

    /// Show word list statistics
    Stats,
}

impl Cli {
    fn config(&self) -> DictionaryConfig {
        let max_attempts = (self.max_attempts > 0).then_some(self.max_attempts);
        let config = DictionaryConfig::new()
            .with_min_num_anagrams(self.min_anagrams)
            .with_max_attempts(max_attempts);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Load the word list named by the -w flag
fn load_dictionary(path: &Path, config: DictionaryConfig) -> Result<AnagramDictionary> {
    let dictionary = if path.as_os_str() == "-" {
        load_from_stdin(config).context("Failed to read word list from stdin")?
    } else {
        load_from_file(path, config)
            .with_context(|| format!("Failed to load word list {}", path.display()))?
    };

    info!("Loaded {} words", dictionary.index().len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    let mut dictionary = load_dictionary(&cli.words, config.clone())?;

    match cli.command {
        Commands::Lookup { word, base } => {
            let result = lookup_word(dictionary.index(), &word, base.as_deref());
            print_lookup_result(&result);
        }
        Commands::Extend { word, strict } => {
            let rule = if strict {
                MatchRule::OneLetter
            } else {
                MatchRule::Substring
            };
            let result = extend_word(dictionary.index(), &word, rule);
            print_extend_result(&result);
        }
        Commands::Starter { count } => {
            let picks = pick_starters(&mut dictionary, count)?;
            print_starter_picks(&picks);
        }
        Commands::Survey { sample } => {
            let result = run_survey(dictionary.index(), &config, sample);
            print_survey_result(&result);
        }
        Commands::Stats => print_stats(&dictionary.index().stats()),
    }

    Ok(())
}
