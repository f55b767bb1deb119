// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, rack};

pub struct GameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout<'a>,
    rack_size: u8,
    num_players: u8,
    num_passes_to_end: u8,
    bingo_bonus: i16,
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        self.alphabet
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &'a board_layout::BoardLayout<'a> {
        self.board_layout
    }

    #[inline(always)]
    pub fn rack_size(&self) -> u8 {
        self.rack_size
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    // consecutive passes across all players
    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        self.num_passes_to_end
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: u8) -> i16 {
        // branchless
        self.bingo_bonus & -((num_played >= self.rack_size) as i16)
    }
}

pub fn make_common_game_config() -> GameConfig<'static> {
    GameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: &board_layout::STANDARD_BOARD_LAYOUT,
        rack_size: rack::MAX_RACK_SIZE as u8,
        num_players: 2,
        num_passes_to_end: 2,
        bingo_bonus: 40,
    }
}
