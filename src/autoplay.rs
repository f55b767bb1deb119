// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_log, game_state, lexicon, move_picker, movegen};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedGame {
    pub num_turns: u32,
    pub num_passes: u32,
    pub outcome: game_log::Outcome,
}

// Plays one game to the end from a freshly drawn state. pickers[i] moves for
// player i. The final position stays in game_state.
pub fn play_game<R: Rng + ?Sized>(
    lexicon: &lexicon::Lexicon,
    pickers: &[move_picker::MovePicker],
    rng: &mut R,
    move_generator: &mut movegen::MoveGenerator,
    game_state: &mut game_state::GameState<'_>,
) -> error::Returns<FinishedGame> {
    if pickers.len() != game_state.players.len() {
        return_error!(
            Game,
            format!(
                "{} pickers for {} players",
                pickers.len(),
                game_state.players.len()
            )
        );
    }
    let game_config = game_state.game_config;
    game_state.reset_and_draw_tiles(rng);
    let mut num_turns = 0u32;
    let mut num_passes = 0u32;
    while !game_state.is_over() {
        let turn = game_state.turn as usize;
        log::trace!("turn {}: racks {:?}", num_turns, game_state.fmt_racks());
        move_generator.gen_moves(
            game_config,
            lexicon,
            &game_state.board,
            game_state.current_player().rack,
        );
        match pickers[turn].pick(&move_generator.plays, rng) {
            Some(valued_play) => {
                let valued_play = valued_play.clone();
                log::trace!(
                    "turn {}: player {} scores {}",
                    num_turns,
                    turn + 1,
                    valued_play.score
                );
                game_state.play(&valued_play)?;
            }
            None => {
                num_passes += 1;
                game_state.pass();
            }
        }
        num_turns += 1;
        game_state.next_turn();
    }
    log::debug!(
        "game over after {} turns, scores {:?}",
        num_turns,
        game_state.players.iter().map(|p| p.score).collect::<Vec<_>>()
    );
    Ok(FinishedGame {
        num_turns,
        num_passes,
        outcome: game_state.outcome(),
    })
}
