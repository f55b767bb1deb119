// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use lexdawg::{alphabet, error, lexicon};

/// Builds a lexicon file (forward and reversed word graphs) from a word list.
#[derive(Debug, Parser)]
#[command(name = "buildlex", version)]
struct Opts {
    /// Word list, one word per line.
    input: String,

    /// Output lexicon file.
    output: String,

    /// Longer words are dropped.
    #[arg(long, default_value_t = lexicon::DEFAULT_MAX_LEN)]
    max_len: usize,
}

fn main() -> error::Returns<()> {
    let opts = Opts::parse();
    let t0 = std::time::Instant::now();
    let machine_words = lexicon::read_machine_words(
        &alphabet::ENGLISH_ALPHABET,
        &std::fs::read_to_string(&opts.input)?,
        opts.max_len,
    )?;
    println!("read {} words from {}", machine_words.len(), opts.input);
    let lex = lexicon::Lexicon::from_machine_words(&machine_words)?;
    let bytes = lex.to_bytes()?;
    std::fs::write(&opts.output, &bytes)?;
    println!(
        "wrote {} bytes to {} ({} + {} nodes) in {} ms",
        bytes.len(),
        opts.output,
        lex.forward().len(),
        lex.reversed().len(),
        t0.elapsed().as_millis()
    );
    Ok(())
}
