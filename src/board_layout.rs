// Copyright (C) 2020-2026 Andy Kurnia.

use super::board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

impl Premium {
    // Two-character marker for board printouts, empty for plain squares.
    pub fn label(&self) -> &'static str {
        match (self.word_multiplier, self.letter_multiplier) {
            (3, _) => "3W",
            (2, _) => "2W",
            (_, 3) => "3L",
            (_, 2) => "2L",
            _ => "",
        }
    }
}

const TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
const DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
const TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
const DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
const FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

pub struct BoardLayout<'a> {
    premiums: &'a [Premium],
    dim: board::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout<'_> {
    #[inline(always)]
    pub fn dim(&self) -> board::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }
}

// Letter premiums dominate. There is no double word on the centre star.
pub static STANDARD_BOARD_LAYOUT: BoardLayout = BoardLayout {
    premiums: &[
        TLS, FVS, FVS, FVS, TWS, FVS, FVS, DLS, FVS, FVS, TWS, FVS, FVS, FVS, TLS, //
        FVS, DLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DLS, FVS, //
        FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
        FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, //
        TWS, FVS, FVS, FVS, DWS, FVS, DLS, FVS, DLS, FVS, DWS, FVS, FVS, FVS, TWS, //
        FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
        FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, //
        DLS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
        FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, //
        FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
        TWS, FVS, FVS, FVS, DWS, FVS, DLS, FVS, DLS, FVS, DWS, FVS, FVS, FVS, TWS, //
        FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, //
        FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
        FVS, DLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DLS, FVS, //
        TLS, FVS, FVS, FVS, TWS, FVS, FVS, DLS, FVS, FVS, TWS, FVS, FVS, FVS, TLS, //
    ],
    dim: board::STANDARD_DIM,
    star_row: 7,
    star_col: 7,
};
