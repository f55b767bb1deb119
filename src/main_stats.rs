// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use lexdawg::{error, game_log};

/// Summarizes a CSV game log written by auto.
#[derive(Debug, Parser)]
#[command(name = "stats", version)]
struct Opts {
    /// Game log, or - for standard input.
    #[arg(default_value = "-")]
    log: String,
}

fn main() -> error::Returns<()> {
    let opts = Opts::parse();
    let summary = if opts.log == "-" {
        game_log::summarize(std::io::stdin().lock())?
    } else {
        game_log::summarize(std::fs::File::open(&opts.log)?)?
    };
    println!("{}", summary);
    Ok(())
}
