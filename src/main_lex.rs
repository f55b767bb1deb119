// Copyright (C) 2020-2026 Andy Kurnia.

use clap::{Parser, Subcommand};
use lexdawg::{alphabet, error, lexicon};
use std::io::Write;

/// Inspects a lexicon file written by buildlex.
#[derive(Debug, Parser)]
#[command(name = "lex", version)]
struct Opts {
    /// Lexicon file.
    lexicon: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Looks up each word, prints it with "valid" or "invalid".
    Check { words: Vec<String> },

    /// Prints every word in order.
    Dump {
        /// Dump the reversed graph instead.
        #[arg(long)]
        reversed: bool,
    },

    /// Prints word and node counts.
    Info,

    /// Writes the graph in Graphviz dot format.
    Dot {
        #[arg(long)]
        reversed: bool,
    },
}

fn main() -> error::Returns<()> {
    let opts = Opts::parse();
    let lex = lexicon::Lexicon::from_bytes_alloc(&std::fs::read(&opts.lexicon)?)?;
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    match opts.command {
        Command::Check { words } => {
            for word in words {
                // input that is not a word is simply not in the lexicon
                let valid = alphabet
                    .parse_word(&word)
                    .is_ok_and(|w| !w.is_empty() && lex.contains(&w));
                println!("{} {}", word, if valid { "valid" } else { "invalid" });
            }
        }
        Command::Dump { reversed } => {
            let graph = if reversed { lex.reversed() } else { lex.forward() };
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            let mut result = Ok(());
            graph.for_each_word(|w| {
                if result.is_ok() {
                    result = writeln!(out, "{}", alphabet.fmt_word(w));
                }
            });
            result?;
            out.flush()?;
        }
        Command::Info => {
            println!("words: {}", lex.forward().count_words());
            println!("forward nodes: {}", lex.forward().len());
            println!("reversed nodes: {}", lex.reversed().len());
        }
        Command::Dot { reversed } => {
            let graph = if reversed { lex.reversed() } else { lex.forward() };
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            graph.write_dot(alphabet, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
