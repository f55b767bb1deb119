// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Tile 0 is never a letter. It marks an empty square on the board.
pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
}

const fn tile(label: &str, freq: u8, score: i8) -> Tile<'_> {
    Tile { label, freq, score }
}

pub struct Alphabet<'a> {
    tiles: &'a [Tile<'a>],
}

impl<'a> Alphabet<'a> {
    // includes the unused tile 0
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    #[inline(always)]
    pub fn letters(&self) -> std::ops::Range<u8> {
        1..self.len()
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile<'a> {
        &self.tiles[idx as usize]
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        if idx == 0 || idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(idx).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    pub fn num_tiles(&self) -> u16 {
        self.letters().map(|t| self.freq(t) as u16).sum()
    }

    // Only single-byte uppercase labels are supported. Lowercase input is folded.
    #[inline(always)]
    pub fn tile_of(&self, c: char) -> Option<u8> {
        let c = c.to_ascii_uppercase();
        self.letters()
            .find(|&t| self.get(t).label.len() == 1 && self.get(t).label.starts_with(c))
    }

    pub fn parse_word(&self, s: &str) -> error::Returns<Box<[u8]>> {
        let mut v = Vec::with_capacity(s.len());
        for c in s.chars() {
            match self.tile_of(c) {
                Some(t) => v.push(t),
                None => {
                    return_error!(Lexicon, format!("invalid tile {c:?} after {v:?} in {s:?}"));
                }
            }
        }
        Ok(v.into_boxed_slice())
    }

    pub fn fmt_word(&self, word: &[u8]) -> String {
        let mut s = String::with_capacity(word.len());
        for &t in word {
            s.push_str(self.from_board(t).unwrap_or("?"));
        }
        s
    }

    // same as fmt_word, but sorted, for display only
    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        let mut v = rack.to_vec();
        v.sort_unstable();
        self.fmt_word(&v)
    }
}

// English letter values and distribution, 101 tiles, no blanks.
pub static ENGLISH_ALPHABET: Alphabet = Alphabet {
    tiles: &[
        tile(".", 0, 0),
        tile("A", 7, 1),
        tile("B", 2, 4),
        tile("C", 2, 5),
        tile("D", 5, 2),
        tile("E", 18, 1),
        tile("F", 2, 4),
        tile("G", 3, 3),
        tile("H", 2, 4),
        tile("I", 4, 2),
        tile("J", 2, 4),
        tile("K", 3, 3),
        tile("L", 3, 3),
        tile("M", 3, 3),
        tile("N", 11, 1),
        tile("O", 6, 1),
        tile("P", 2, 4),
        tile("Q", 1, 10),
        tile("R", 5, 2),
        tile("S", 5, 2),
        tile("T", 5, 2),
        tile("U", 2, 2),
        tile("V", 2, 4),
        tile("W", 2, 5),
        tile("X", 1, 8),
        tile("Y", 1, 8),
        tile("Z", 2, 5),
    ],
};
