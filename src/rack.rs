// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

pub const MAX_RACK_SIZE: usize = 7;

// Fixed capacity and Copy, so every search branch can own its own rack.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: [u8; MAX_RACK_SIZE],
    len: u8,
}

impl std::fmt::Debug for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}",
            alphabet::ENGLISH_ALPHABET.fmt_rack(self.tiles())
        )
    }
}

impl Rack {
    pub fn new(tiles: &[u8]) -> error::Returns<Self> {
        if tiles.len() > MAX_RACK_SIZE {
            return_error!(
                Rack,
                format!(
                    "rack holds at most {} tiles, found {}",
                    MAX_RACK_SIZE,
                    tiles.len()
                )
            );
        }
        if let Some(&t) = tiles.iter().find(|&&t| t == 0) {
            return_error!(Rack, format!("invalid tile {t} in rack"));
        }
        let mut ret = Self::default();
        ret.tiles[..tiles.len()].copy_from_slice(tiles);
        ret.len = tiles.len() as u8;
        Ok(ret)
    }

    pub fn parse(alphabet: &alphabet::Alphabet<'_>, s: &str) -> error::Returns<Self> {
        match alphabet.parse_word(s) {
            Ok(v) => Self::new(&v),
            Err(e) => {
                return_error!(Rack, format!("cannot parse rack {s:?}: {e}"));
            }
        }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles[..self.len as usize]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_RACK_SIZE
    }

    #[inline(always)]
    pub fn contains(&self, tile: u8) -> bool {
        self.tiles().contains(&tile)
    }

    // Returns false when full.
    pub fn push(&mut self, tile: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.tiles[self.len()] = tile;
        self.len += 1;
        true
    }

    // Removes one instance of the tile in place. Order is not preserved.
    pub fn take(&mut self, tile: u8) -> bool {
        match self.tiles().iter().position(|&t| t == tile) {
            Some(idx) => {
                self.len -= 1;
                self.tiles[idx] = self.tiles[self.len()];
                self.tiles[self.len()] = 0;
                true
            }
            None => false,
        }
    }

    // Copy of this rack minus one instance of the tile.
    #[inline(always)]
    pub fn without(mut self, tile: u8) -> Self {
        self.take(tile);
        self
    }

    // Each letter once, in first-seen order.
    pub fn distinct(&self) -> impl Iterator<Item = u8> + '_ {
        let tiles = self.tiles();
        tiles
            .iter()
            .enumerate()
            .filter(move |&(i, t)| !tiles[..i].contains(t))
            .map(|(_, &t)| t)
    }

    // All or nothing.
    pub fn remove_tiles(&mut self, tiles: &[u8]) -> error::Returns<()> {
        let mut tmp = *self;
        for &t in tiles {
            if !tmp.take(t) {
                return_error!(
                    Rack,
                    format!(
                        "rack {:?} does not hold {:?}",
                        self,
                        alphabet::ENGLISH_ALPHABET.fmt_word(tiles)
                    )
                );
            }
        }
        *self = tmp;
        Ok(())
    }
}
