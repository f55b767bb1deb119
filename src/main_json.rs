// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use lexdawg::{alphabet, board, display, error, game_config, lexicon, move_picker, movegen, rack};

/// Answers a JSON question with the best plays, as JSON.
#[derive(Debug, Parser)]
#[command(name = "json", version)]
struct Opts {
    /// Lexicon file written by buildlex.
    lexicon: String,

    /// Question file, or - for standard input.
    #[arg(default_value = "-")]
    question: String,

    /// Also print the board and a readable ranking.
    #[arg(short, long)]
    verbose: bool,
}

// board: one string per row, '.' for empty squares.
// rack: letters, at most 7.
// count: maximum number of plays returned, at most one per main word.
#[derive(serde::Deserialize)]
struct Question {
    board: Vec<String>,
    rack: String,
    count: usize,
}

// Each tile on board and rack must come out of the bag.
fn check_tile_counts(
    alphabet: &alphabet::Alphabet<'_>,
    board: &board::Board,
    rack: &rack::Rack,
) -> error::Returns<()> {
    let mut available_tally = (0..alphabet.len())
        .map(|tile| alphabet.freq(tile))
        .collect::<Box<_>>();
    for &tile in board
        .tiles()
        .iter()
        .filter(|&&t| t != board::EMPTY)
        .chain(rack.tiles().iter())
    {
        if available_tally[tile as usize] > 0 {
            available_tally[tile as usize] -= 1;
        } else {
            lexdawg::return_error!(
                Game,
                format!(
                    "too many {} (bag contains only {})",
                    alphabet.from_board(tile).unwrap_or("?"),
                    alphabet.freq(tile)
                )
            );
        }
    }
    Ok(())
}

fn main() -> error::Returns<()> {
    let opts = Opts::parse();
    let question: Question = if opts.question == "-" {
        serde_json::from_reader(std::io::stdin().lock())?
    } else {
        serde_json::from_str(&std::fs::read_to_string(&opts.question)?)?
    };

    let lex = lexicon::Lexicon::from_bytes_alloc(&std::fs::read(&opts.lexicon)?)?;
    let game_config = game_config::make_common_game_config();
    let alphabet = game_config.alphabet();
    let board = board::Board::from_rows(
        alphabet,
        game_config.board_layout().dim(),
        &question.board,
    )?;
    let rack = rack::Rack::parse(alphabet, &question.rack)?;
    check_tile_counts(alphabet, &board, &rack)?;

    let mut move_generator = movegen::MoveGenerator::new();
    move_generator.gen_moves(&game_config, &lex, &board, rack);
    let plays = move_picker::best_unique_plays(&move_generator.plays, &board, question.count);

    if opts.verbose {
        display::print_board(alphabet, game_config.board_layout(), &board);
        println!(
            "found {} plays, showing {}",
            move_generator.plays.len(),
            plays.len()
        );
        for vp in plays.iter() {
            println!("{:4} {}", vp.score, display::fmt_play(alphabet, &board, &vp.play));
        }
    }

    let mut result = Vec::<serde_json::Value>::with_capacity(plays.len() + 1);
    for vp in plays.iter() {
        if let movegen::Play::Place {
            down,
            lane,
            idx,
            word,
        } = &vp.play
        {
            // word: array of numbers, 1 for A, 0 for a tile already on board.
            result.push(serde_json::json!({
                "score": vp.score,
                "action": "play",
                "down": down,
                "lane": lane,
                "idx": idx,
                "word": word,
                "notation": display::fmt_play(alphabet, &board, &vp.play),
            }));
        }
    }
    if result.is_empty() {
        result.push(serde_json::json!({ "score": 0, "action": "pass" }));
    }
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
