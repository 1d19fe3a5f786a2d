//! Line-based play mode
//!
//! Reads one submission per line and reports the outcome after each.

use crate::dictionary::DictionarySource;
use crate::game::{Session, SubmitError};
use crate::output::formatters::{format_rejection, format_root, format_used_words};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Commands understood in place of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    NewRound,
    ShowWords,
    Quit,
}

impl PlayCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":new" | ":n" => Some(Self::NewRound),
            ":words" | ":w" => Some(Self::ShowWords),
            ":quit" | ":q" | ":exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Play on standard input and output
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<D: DictionarySource>(session: &mut Session<D>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(session, stdin.lock(), stdout.lock())
}

/// Drive a session from any line source
///
/// Starts a round, then handles one line at a time until `:quit` or end of
/// input.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play<D, R, W>(session: &mut Session<D>, mut input: R, mut out: W) -> Result<()>
where
    D: DictionarySource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                        Word Scramble                         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the letters of the root word.")?;
    writeln!(out, "Words must be real, at least three letters long, and not the root itself.\n")?;
    writeln!(out, "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    session.start_round();
    announce_round(session, &mut out)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match PlayCommand::parse(&line) {
            Some(PlayCommand::Quit) => break,
            Some(PlayCommand::NewRound) => {
                session.start_round();
                writeln!(out, "\n🔄 New round started!")?;
                announce_round(session, &mut out)?;
                continue;
            }
            Some(PlayCommand::ShowWords) => {
                writeln!(out, "{}\n", format_used_words(session.used_words()))?;
                continue;
            }
            None => {}
        }

        match session.submit_word(&line) {
            Ok(Some(word)) => {
                writeln!(out, "{} {}", "✓".green().bold(), word.green())?;
                writeln!(out, "{}\n", format_used_words(session.used_words()))?;
            }
            Ok(None) => {}
            Err(SubmitError::Rejected(reason)) => {
                writeln!(out, "{}\n", format_rejection(&reason))?;
            }
            Err(err @ SubmitError::RoundNotStarted) => return Err(err.into()),
        }
    }

    let found = session.used_words().len();
    writeln!(
        out,
        "\n👋 Thanks for playing! You found {found} {}.\n",
        if found == 1 { "word" } else { "words" }
    )?;

    Ok(())
}

fn announce_round<D: DictionarySource, W: Write>(session: &Session<D>, out: &mut W) -> Result<()> {
    if let Some(root) = session.root_word() {
        writeln!(out, "{}\n", format_root(root))?;
    }
    Ok(())
}
