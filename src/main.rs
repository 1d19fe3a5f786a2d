//! Word Scramble - CLI
//!
//! Play Word Scramble in the terminal, check single words, and explore which
//! words each root word allows.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use word_scramble::{
    commands::{check_word, list_solutions, run_play, run_survey},
    config::GameConfig,
    dictionary::{Dictionary, DictionarySource, WordSet},
    logging,
    output::{print_check_result, print_solutions, print_survey_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a single root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    start_words: Option<PathBuf>,

    /// Lexicon: newline-delimited file of accepted words (default: built-in English lexicon)
    #[arg(short, long, global = true)]
    lexicon: Option<PathBuf>,

    /// Seed for root word selection, for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Check whether a word would be accepted for a root word
    Check {
        /// The word to check
        word: String,

        /// Root word to check against
        #[arg(short, long, default_value = word_scramble::dictionary::DEFAULT_ROOT_WORD)]
        root: String,
    },

    /// List every accepted word for a root word
    Solutions {
        /// Root word (default: a random root word)
        root: Option<String>,
    },

    /// Count the solutions of every root word in the list
    Survey,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::new(
            self.start_words.clone().into(),
            self.lexicon.clone().into(),
            self.seed,
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let dictionary = config.load_dictionary();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, dictionary),
        Commands::Check { word, root } => {
            run_check_command(&word, &root, &dictionary);
            Ok(())
        }
        Commands::Solutions { root } => {
            run_solutions_command(&config, root.as_deref(), &dictionary);
            Ok(())
        }
        Commands::Survey => {
            run_survey_command(&dictionary);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig, dictionary: Dictionary<WordSet>) -> Result<()> {
    let mut session = config.new_session(dictionary);
    run_play(&mut session)
}

fn run_check_command(word: &str, root: &str, dictionary: &Dictionary<WordSet>) {
    let result = check_word(word, root, dictionary);
    print_check_result(&result);

    // Verdict already printed
    if result.is_rejected() {
        std::process::exit(1);
    }
}

fn run_solutions_command(config: &GameConfig, root: Option<&str>, dictionary: &Dictionary<WordSet>) {
    let root = root.map_or_else(|| pick_root(config, dictionary), str::to_string);

    let list = list_solutions(&root, dictionary);
    print_solutions(&list);
}

fn pick_root(config: &GameConfig, dictionary: &Dictionary<WordSet>) -> String {
    match config.seed {
        Some(seed) => dictionary.pick_root_word(&mut StdRng::seed_from_u64(seed)),
        None => dictionary.pick_root_word(&mut rand::rng()),
    }
}

fn run_survey_command(dictionary: &Dictionary<WordSet>) {
    println!(
        "Surveying {} root words...",
        dictionary.root_words().len()
    );
    let result = run_survey(dictionary, true);
    print_survey_result(&result);
}
