// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, game_config, movegen};

// Reads the board along a play's orientation. Outside is empty.
struct Lanes<'a> {
    board: &'a board::Board,
    down: bool,
}

impl Lanes<'_> {
    #[inline(always)]
    fn coord(&self, lane: i8, idx: i8) -> (i8, i8) {
        if self.down { (idx, lane) } else { (lane, idx) }
    }

    #[inline(always)]
    fn tile_at(&self, lane: i8, idx: i8) -> u8 {
        let (row, col) = self.coord(lane, idx);
        self.board.get(row, col).unwrap_or(board::EMPTY)
    }

    #[inline(always)]
    fn premium_at(
        &self,
        layout: &board_layout::BoardLayout<'_>,
        lane: i8,
        idx: i8,
    ) -> board_layout::Premium {
        let (row, col) = self.coord(lane, idx);
        layout.premium_at(row, col)
    }

    // First lane of the perpendicular run through (lane, idx).
    fn perpendicular_start(&self, lane: i8, idx: i8) -> i8 {
        let mut j = lane;
        while self.tile_at(j - 1, idx) != board::EMPTY {
            j -= 1;
        }
        j
    }

    fn has_perpendicular(&self, lane: i8, idx: i8) -> bool {
        self.tile_at(lane - 1, idx) != board::EMPTY || self.tile_at(lane + 1, idx) != board::EMPTY
    }
}

// Assumes the play is legal on this board, which does not have it yet.
pub fn compute_score(
    game_config: &game_config::GameConfig<'_>,
    board: &board::Board,
    play: &movegen::Play,
) -> i16 {
    let movegen::Play::Place {
        down,
        lane,
        idx,
        word,
    } = play
    else {
        return 0;
    };
    let alphabet = game_config.alphabet();
    let layout = game_config.board_layout();
    let lanes = Lanes { board, down: *down };

    let mut recounted_score = 0;
    let mut num_played = 0;
    {
        let mut word_multiplier = 1;
        let mut word_score = 0i16;
        for (i, &tile) in (*idx..).zip(word.iter()) {
            let tile_multiplier;
            let placed_tile = if tile != 0 {
                let premium = lanes.premium_at(layout, *lane, i);
                num_played += 1;
                word_multiplier *= premium.word_multiplier;
                tile_multiplier = premium.letter_multiplier;
                tile
            } else {
                tile_multiplier = 1;
                lanes.tile_at(*lane, i)
            };
            word_score += alphabet.score(placed_tile) as i16 * tile_multiplier as i16;
        }
        recounted_score += word_score * word_multiplier as i16;
    }

    for (i, &tile) in (*idx..).zip(word.iter()) {
        if tile == 0 || !lanes.has_perpendicular(*lane, i) {
            continue;
        }
        let premium = lanes.premium_at(layout, *lane, i);
        let mut word_score = 0i16;
        let mut j = lanes.perpendicular_start(*lane, i);
        loop {
            let t = if j == *lane {
                tile
            } else {
                lanes.tile_at(j, i)
            };
            if t == board::EMPTY {
                break;
            }
            let tile_multiplier = if j == *lane {
                premium.letter_multiplier
            } else {
                1
            };
            word_score += alphabet.score(t) as i16 * tile_multiplier as i16;
            j += 1;
        }
        recounted_score += word_score * premium.word_multiplier as i16;
    }

    recounted_score + game_config.num_played_bonus(num_played)
}

// The main word first, then each perpendicular word made by a new tile.
pub fn words_formed(board: &board::Board, play: &movegen::Play) -> Vec<Box<[u8]>> {
    let movegen::Play::Place {
        down,
        lane,
        idx,
        word,
    } = play
    else {
        return Vec::new();
    };
    let lanes = Lanes { board, down: *down };
    let mut ret = Vec::new();
    ret.push(
        (*idx..)
            .zip(word.iter())
            .map(|(i, &t)| if t != 0 { t } else { lanes.tile_at(*lane, i) })
            .collect(),
    );
    for (i, &tile) in (*idx..).zip(word.iter()) {
        if tile == 0 || !lanes.has_perpendicular(*lane, i) {
            continue;
        }
        let mut v = Vec::new();
        let mut j = lanes.perpendicular_start(*lane, i);
        loop {
            let t = if j == *lane {
                tile
            } else {
                lanes.tile_at(j, i)
            };
            if t == board::EMPTY {
                break;
            }
            v.push(t);
            j += 1;
        }
        ret.push(v.into_boxed_slice());
    }
    ret
}
