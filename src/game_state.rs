// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, game_log, movegen, play_scorer, rack};
use rand::prelude::*;

#[derive(Clone, Default)]
pub struct GamePlayer {
    pub score: i32,
    pub rack: rack::Rack,
    pub words: Vec<String>, // main word of each play
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub num_passes: u8, // consecutive, all players
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        Self {
            game_config,
            players: (0..game_config.num_players())
                .map(|_| GamePlayer::default())
                .collect(),
            board: board::Board::new(game_config.board_layout().dim()),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
            num_passes: 0,
        }
    }

    pub fn reset(&mut self) {
        self.players.iter_mut().for_each(|p| *p = GamePlayer::default());
        self.board = board::Board::new(self.game_config.board_layout().dim());
        self.bag = bag::Bag::new(self.game_config.alphabet());
        self.turn = 0;
        self.num_passes = 0;
    }

    pub fn reset_and_draw_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    // The play must have been scored against the current board.
    pub fn play(&mut self, valued_play: &movegen::ValuedPlay) -> error::Returns<()> {
        let movegen::Play::Place {
            down,
            lane,
            idx,
            word,
        } = &valued_play.play
        else {
            self.num_passes += 1;
            return Ok(());
        };
        let alphabet = self.game_config.alphabet();
        let coord = |i: i8| if *down { (i, *lane) } else { (*lane, i) };
        for (i, &tile) in (*idx..).zip(word.iter()) {
            let (row, col) = coord(i);
            match self.board.get(row, col) {
                None => {
                    return_error!(Board, format!("({row}, {col}) is off the board"));
                }
                Some(b) if (b == board::EMPTY) != (tile != 0) => {
                    return_error!(
                        Board,
                        format!(
                            "({row}, {col}) holds {:?}, cannot take {:?}",
                            alphabet.from_board(b).unwrap_or("."),
                            alphabet.from_board(tile).unwrap_or("(through)")
                        )
                    );
                }
                _ => {}
            }
        }
        let main_word = play_scorer::words_formed(&self.board, &valued_play.play)
            .into_iter()
            .next()
            .map(|w| alphabet.fmt_word(&w))
            .unwrap_or_default();

        let placed = word.iter().copied().filter(|&t| t != 0).collect::<Vec<_>>();
        let current_player = &mut self.players[self.turn as usize];
        current_player.rack.remove_tiles(&placed)?;
        for (i, &tile) in (*idx..).zip(word.iter()) {
            if tile != 0 {
                let (row, col) = coord(i);
                self.board.set(row, col, tile);
            }
        }
        current_player.score += valued_play.score as i32;
        current_player.words.push(main_word);
        self.bag.replenish(
            &mut current_player.rack,
            self.game_config.rack_size() as usize,
        );
        self.num_passes = 0;
        Ok(())
    }

    pub fn pass(&mut self) {
        self.num_passes += 1;
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        self.turn -= num_players & -((self.turn >= num_players) as i8) as u8;
    }

    pub fn is_over(&self) -> bool {
        self.num_passes >= self.game_config.num_passes_to_end()
            || (self.bag.is_empty() && self.players.iter().any(|p| p.rack.is_empty()))
    }

    // Only meaningful for two players.
    pub fn outcome(&self) -> game_log::Outcome {
        match self.players[0].score.cmp(&self.players[1].score) {
            std::cmp::Ordering::Greater => game_log::Outcome::Player1,
            std::cmp::Ordering::Less => game_log::Outcome::Player2,
            std::cmp::Ordering::Equal => game_log::Outcome::Draw,
        }
    }

    pub fn fmt_racks(&self) -> Vec<String> {
        let alphabet = self.game_config.alphabet();
        self.players
            .iter()
            .map(|p| alphabet.fmt_rack(p.rack.tiles()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(down: bool, lane: i8, idx: i8, word: &[u8], score: i16) -> movegen::ValuedPlay {
        movegen::ValuedPlay {
            score,
            play: movegen::Play::Place {
                down,
                lane,
                idx,
                word: word.into(),
            },
        }
    }

    fn state_with_racks<'a>(
        config: &'a game_config::GameConfig<'a>,
        racks: &[&str],
    ) -> GameState<'a> {
        let mut game_state = GameState::new(config);
        for (player, s) in game_state.players.iter_mut().zip(racks.iter()) {
            player.rack = rack::Rack::parse(config.alphabet(), s).unwrap();
        }
        game_state
    }

    #[test]
    fn draw_gives_everyone_a_full_rack() {
        let config = game_config::make_common_game_config();
        let mut game_state = GameState::new(&config);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        game_state.reset_and_draw_tiles(&mut rng);
        for p in game_state.players.iter() {
            assert_eq!(p.rack.len(), 7);
        }
        assert_eq!(game_state.bag.len(), 101 - 14);
        game_state.next_turn();
        assert_eq!(
            game_state.current_player().rack.tiles(),
            game_state.players[1].rack.tiles()
        );
        assert!(!game_state.is_over());
    }

    #[test]
    fn play_updates_board_rack_and_score() {
        let config = game_config::make_common_game_config();
        let mut game_state = state_with_racks(&config, &["CATXYZQ", "AEIOU"]);
        game_state.bag = bag::Bag(vec![5, 5]);
        game_state
            .play(&place(false, 7, 6, &[3, 1, 20], 8))
            .unwrap();
        assert_eq!(game_state.board.at(7, 7), 1);
        assert_eq!(game_state.players[0].score, 8);
        assert_eq!(game_state.players[0].words, vec!["CAT"]);
        assert_eq!(
            config.alphabet().fmt_rack(game_state.players[0].rack.tiles()),
            "EEQXYZ"
        );
        assert!(game_state.bag.is_empty());
        game_state.next_turn();
        assert_eq!(game_state.turn, 1);
        // through the A, but the rack has no T
        let e = game_state
            .play(&place(true, 7, 6, &[20, 0, 20], 5))
            .unwrap_err();
        assert_eq!(error::kind_of(&e), Some(error::Kind::Rack));
        assert_eq!(game_state.board.at(6, 7), board::EMPTY);
        // onto an occupied square
        let e = game_state
            .play(&place(false, 7, 7, &[1], 1))
            .unwrap_err();
        assert_eq!(error::kind_of(&e), Some(error::Kind::Board));
        game_state.next_turn();
        assert_eq!(game_state.turn, 0);
    }

    #[test]
    fn passes_end_the_game() {
        let config = game_config::make_common_game_config();
        let mut game_state = state_with_racks(&config, &["A", "B"]);
        game_state.pass();
        assert!(!game_state.is_over());
        game_state.next_turn();
        game_state
            .play(&movegen::ValuedPlay {
                score: 0,
                play: movegen::Play::Pass,
            })
            .unwrap();
        assert!(game_state.is_over());
        assert_eq!(game_state.outcome(), game_log::Outcome::Draw);
    }

    #[test]
    fn empty_rack_and_bag_end_the_game() {
        let config = game_config::make_common_game_config();
        let mut game_state = state_with_racks(&config, &["AT", "B"]);
        game_state.bag = bag::Bag(Vec::new());
        game_state
            .play(&place(false, 7, 7, &[1, 20], 3))
            .unwrap();
        assert!(game_state.players[0].rack.is_empty());
        assert!(game_state.is_over());
        assert_eq!(game_state.outcome(), game_log::Outcome::Player1);
        assert_eq!(game_state.fmt_racks(), vec!["", "B"]);
    }
}
