// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, movegen};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout<'_>, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    let premium = board_layout.premium_at(row, col);
    match (premium.word_multiplier, premium.letter_multiplier) {
        (3, _) => "=",
        (2, _) => "-",
        (_, 3) => "\"",
        (_, 2) => "'",
        _ => " ",
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout<'_>,
    board: &board::Board,
    row: i8,
    col: i8,
) -> &'a str {
    alphabet
        .from_board(board.at(row, col))
        .unwrap_or_else(|| empty_label(board_layout, row, col))
}

// a, b, c...
#[inline(always)]
pub fn column(col: i8) -> char {
    ((col as u8) + b'a') as char
}

fn write_column_header(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(column(c));
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn fmt_board(
    alphabet: &alphabet::Alphabet<'_>,
    board_layout: &board_layout::BoardLayout<'_>,
    board: &board::Board,
) -> String {
    let dim = board.dim();
    let mut s = String::new();
    write_column_header(&mut s, dim.cols);
    write_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(board_label(alphabet, board_layout, board, r, c));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    write_border(&mut s, dim.cols);
    write_column_header(&mut s, dim.cols);
    s
}

pub fn print_board(
    alphabet: &alphabet::Alphabet<'_>,
    board_layout: &board_layout::BoardLayout<'_>,
    board: &board::Board,
) {
    print!("{}", fmt_board(alphabet, board_layout, board));
}

// "8H CA(T)S": across starts with the row, down with the column. Tiles already
// on the board are in parentheses.
pub fn fmt_play(
    alphabet: &alphabet::Alphabet<'_>,
    board: &board::Board,
    play: &movegen::Play,
) -> String {
    let movegen::Play::Place {
        down,
        lane,
        idx,
        word,
    } = play
    else {
        return "(Pass)".to_string();
    };
    let mut s = String::new();
    if *down {
        let _ = write!(s, "{}{} ", column(*lane).to_ascii_uppercase(), idx + 1);
    } else {
        let _ = write!(s, "{}{} ", lane + 1, column(*idx).to_ascii_uppercase());
    }
    let mut inside = false;
    for (i, &tile) in (*idx..).zip(word.iter()) {
        let through = tile == 0;
        if through != inside {
            s.push(if through { '(' } else { ')' });
            inside = through;
        }
        let tile = if through {
            if *down {
                board.at(i, *lane)
            } else {
                board.at(*lane, i)
            }
        } else {
            tile
        };
        s.push_str(alphabet.from_board(tile).unwrap_or("?"));
    }
    if inside {
        s.push(')');
    }
    s
}
