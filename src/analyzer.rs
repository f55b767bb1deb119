// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, graph};

// Bit t is set when tile t may go there. Only tiles 1..=26 are meaningful.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const FULL: LetterSet = LetterSet(((1u32 << 26) - 1) << 1);

    #[inline(always)]
    pub fn contains(self, tile: u8) -> bool {
        tile < 32 && self.0 & (1 << tile) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, tile: u8) {
        self.0 |= 1 << tile;
    }

    #[inline(always)]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    // In alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let t = bits.trailing_zeros() as u8;
                bits &= bits - 1;
                Some(t)
            }
        })
    }
}

impl std::fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for t in self.iter() {
            f.write_str(
                super::alphabet::ENGLISH_ALPHABET
                    .from_board(t)
                    .unwrap_or("?"),
            )?;
        }
        f.write_str("}")
    }
}

// Entries exist only for squares that were empty when the table was built.
pub struct CrossCheckTable {
    dim: board::Dim,
    sets: Box<[Option<LetterSet>]>,
}

impl CrossCheckTable {
    #[inline(always)]
    pub fn dim(&self) -> board::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn try_get(&self, row: i8, col: i8) -> Option<LetterSet> {
        if self.dim.contains(row, col) {
            self.sets[self.dim.at_row_col(row, col)]
        } else {
            None
        }
    }

    // Asking for an occupied or unknown square is a caller bug.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> LetterSet {
        match self.try_get(row, col) {
            Some(x) => x,
            None => panic!("no cross-check entry for ({row}, {col})"),
        }
    }
}

// Empty squares orthogonally next to a tile, in row-major order. An empty
// board has only its centre.
pub fn find_anchors(board: &board::Board) -> Vec<board::Coord> {
    let dim = board.dim();
    let mut anchors = Vec::new();
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if board.at(row, col) == board::EMPTY
                && (board.is_occupied(row - 1, col)
                    || board.is_occupied(row + 1, col)
                    || board.is_occupied(row, col - 1)
                    || board.is_occupied(row, col + 1))
            {
                anchors.push(board::Coord::new(row, col));
            }
        }
    }
    if board.is_empty() {
        anchors.push(dim.center());
    }
    anchors
}

// The maximal vertical run of tiles through (row, col), top to bottom.
pub fn collect_vertical_word(board: &board::Board, mut row: i8, col: i8, word: &mut Vec<u8>) {
    word.clear();
    while board.is_occupied(row - 1, col) {
        row -= 1;
    }
    while board.is_occupied(row, col) {
        word.push(board.at(row, col));
        row += 1;
    }
}

pub fn compute_cross_checks(
    forward: &graph::WordGraph,
    board: &mut board::Board,
) -> CrossCheckTable {
    let dim = board.dim();
    let mut sets = vec![None; dim.num_cells()].into_boxed_slice();
    let mut word = Vec::new();
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if board.at(row, col) != board::EMPTY {
                continue;
            }
            let set = if board.is_occupied(row - 1, col) || board.is_occupied(row + 1, col) {
                let mut set = LetterSet::EMPTY;
                for tile in LetterSet::FULL.iter() {
                    let scratch = board.scratch(row, col, tile);
                    collect_vertical_word(&scratch, row, col, &mut word);
                    if forward.search_terminal(&word) {
                        set.insert(tile);
                    }
                }
                set
            } else {
                LetterSet::FULL
            };
            sets[dim.at_row_col(row, col)] = Some(set);
        }
    }
    CrossCheckTable { dim, sets }
}
