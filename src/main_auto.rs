// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use lexdawg::{autoplay, error, game_config, game_log, game_state, lexicon, move_picker, movegen};
use rand::prelude::*;

/// Self-play: two computer players play each other, games are logged as CSV.
#[derive(Debug, Parser)]
#[command(name = "auto", version)]
struct Opts {
    /// Lexicon file written by buildlex.
    lexicon: String,

    #[arg(short = 'n', long, default_value_t = 100)]
    num_games: usize,

    /// Defaults to the number of CPUs.
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Game i is played with seed + i, so a seeded run is repeatable.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = move_picker::MovePicker::Greedy)]
    player1: move_picker::MovePicker,

    #[arg(long, default_value_t = move_picker::MovePicker::Greedy)]
    player2: move_picker::MovePicker,

    /// CSV log file. Defaults to log-<hex epoch seconds>.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> error::Returns<()> {
    let opts = Opts::parse();
    let lex = std::sync::Arc::new(lexicon::Lexicon::from_bytes_alloc(&std::fs::read(
        &opts.lexicon,
    )?)?);
    let game_config = std::sync::Arc::new(game_config::make_common_game_config());
    let pickers = [opts.player1, opts.player2];
    let base_seed = opts.seed.unwrap_or_else(|| rand::rng().random());
    let num_threads = opts.threads.unwrap_or_else(num_cpus::get).max(1);
    let num_games = opts.num_games;
    let num_processed_games = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    println!(
        "playing {} games ({} vs {}) on {} threads, seed {}",
        num_games, pickers[0], pickers[1], num_threads, base_seed
    );

    let mut threads = vec![];
    let (tx, rx) = std::sync::mpsc::channel();
    for _ in 0..num_threads {
        let tx = tx.clone();
        let lex = std::sync::Arc::clone(&lex);
        let game_config = std::sync::Arc::clone(&game_config);
        let num_processed_games = std::sync::Arc::clone(&num_processed_games);
        threads.push(std::thread::spawn(move || -> error::Returns<game_log::Summary> {
            let mut summary = game_log::Summary::default();
            let mut move_generator = movegen::MoveGenerator::new();
            let mut game_state = game_state::GameState::new(&game_config);
            loop {
                let game_index =
                    num_processed_games.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                if game_index >= num_games {
                    break;
                }
                let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(
                    base_seed.wrapping_add(game_index as u64),
                );
                let finished = autoplay::play_game(
                    &lex,
                    &pickers,
                    &mut rng,
                    &mut move_generator,
                    &mut game_state,
                )?;
                let record = game_log::GameRecord::from_game(game_index as u64 + 1, &game_state);
                summary.add(&record);
                if tx.send((record, finished.num_turns)).is_err() {
                    // writer is gone
                    break;
                }
            }
            Ok(summary)
        }));
    }
    drop(tx);

    let output = match opts.output {
        Some(x) => x,
        None => {
            let epoch_secs = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_secs();
            format!("log-{:08x}", epoch_secs)
        }
    };
    println!("logging to {}", output);
    let mut csv_log = csv::Writer::from_path(&output)?;
    let mut completed_games = 0u64;
    let mut completed_moves = 0u64;
    let t0 = std::time::Instant::now();
    let mut last_tick = 0u64;
    for (record, num_turns) in rx.iter() {
        csv_log.serialize(&record)?;
        completed_games += 1;
        completed_moves += num_turns as u64;
        let elapsed_secs = t0.elapsed().as_secs();
        if elapsed_secs > last_tick {
            last_tick = elapsed_secs;
            println!(
                "After {} seconds, have logged {} games ({} moves) into {}",
                elapsed_secs, completed_games, completed_moves, output
            );
        }
    }
    csv_log.flush()?;
    println!(
        "After {} ms, have logged {} games ({} moves) into {}",
        t0.elapsed().as_millis(),
        completed_games,
        completed_moves,
        output
    );

    // each worker summarized its own games
    let mut summary = game_log::Summary::default();
    for thread in threads {
        match thread.join() {
            Ok(Ok(worker_summary)) => summary.merge(&worker_summary),
            Ok(Err(e)) => return Err(e),
            Err(e) => println!("{:?}", e),
        }
    }

    if summary.num_games > 0 {
        println!("{}", summary);
    }
    Ok(())
}
