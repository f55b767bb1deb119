// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn center(&self) -> Coord {
        Coord {
            row: self.rows / 2,
            col: self.cols / 2,
        }
    }

    #[inline(always)]
    pub fn transposed(&self) -> Dim {
        Dim {
            rows: self.cols,
            cols: self.rows,
        }
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub const EMPTY: u8 = 0;

pub const STANDARD_DIM: Dim = Dim { rows: 15, cols: 15 };

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dim: Dim,
    tiles: Box<[u8]>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dim.rows {
            for col in 0..self.dim.cols {
                let t = self.at(row, col);
                write!(
                    f,
                    "{}",
                    alphabet::ENGLISH_ALPHABET.from_board(t).unwrap_or(".")
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            tiles: vec![EMPTY; dim.num_cells()].into_boxed_slice(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_DIM)
    }

    // One string per row. '.', '_' and ' ' are empty squares.
    pub fn from_rows<S: AsRef<str>>(
        alphabet: &alphabet::Alphabet<'_>,
        dim: Dim,
        rows: &[S],
    ) -> error::Returns<Self> {
        if rows.len() != dim.rows as usize {
            return_error!(
                Board,
                format!("need {} rows, found {} rows", dim.rows, rows.len())
            );
        }
        let mut board = Self::new(dim);
        for (row, s) in (0..).zip(rows.iter()) {
            let s = s.as_ref();
            let num_cols = s.chars().count();
            if num_cols != dim.cols as usize {
                return_error!(
                    Board,
                    format!(
                        "row {} (0-based): need {} cols, found {} cols",
                        row, dim.cols, num_cols
                    )
                );
            }
            for (col, c) in (0..).zip(s.chars()) {
                if matches!(c, '.' | '_' | ' ') {
                    continue;
                }
                match alphabet.tile_of(c) {
                    Some(t) => board.set(row, col, t),
                    None => {
                        return_error!(
                            Board,
                            format!("row {} col {} (0-based): invalid tile {:?}", row, col, c)
                        );
                    }
                }
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // row and col must be in range.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> u8 {
        self.tiles[self.dim.at_row_col(row, col)]
    }

    // None when outside the board.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<u8> {
        if self.dim.contains(row, col) {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    // false when outside the board.
    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.get(row, col).is_some_and(|t| t != EMPTY)
    }

    #[inline(always)]
    pub fn set(&mut self, row: i8, col: i8, tile: u8) {
        let idx = self.dim.at_row_col(row, col);
        self.tiles[idx] = tile;
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != EMPTY).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&t| t == EMPTY)
    }

    // Swaps rows and columns, so that down plays read across.
    pub fn transposed(&self) -> Board {
        let mut ret = Board::new(self.dim.transposed());
        for row in 0..self.dim.rows {
            for col in 0..self.dim.cols {
                ret.set(col, row, self.at(row, col));
            }
        }
        ret
    }

    // Temporarily puts a tile on the board. The old tile is restored when the
    // guard is dropped, on every path out of the caller.
    pub fn scratch(&mut self, row: i8, col: i8, tile: u8) -> ScratchTile<'_> {
        let idx = self.dim.at_row_col(row, col);
        let prev = std::mem::replace(&mut self.tiles[idx], tile);
        ScratchTile {
            board: self,
            idx,
            prev,
        }
    }
}

pub struct ScratchTile<'a> {
    board: &'a mut Board,
    idx: usize,
    prev: u8,
}

impl std::ops::Deref for ScratchTile<'_> {
    type Target = Board;

    #[inline(always)]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for ScratchTile<'_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.board.tiles[self.idx] = self.prev;
    }
}

#[cfg(test)]
pub(crate) fn board_with_rows(rows: &[(i8, i8, &str)]) -> Board {
    let a = &alphabet::ENGLISH_ALPHABET;
    let mut board = Board::standard();
    for &(row, col, word) in rows {
        for (c, t) in (col..).zip(a.parse_word(word).unwrap().iter()) {
            board.set(row, c, *t);
        }
    }
    board
}
