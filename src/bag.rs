// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, rack};
use rand::prelude::*;

#[derive(Clone)]
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in alphabet.letters() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    // Draws from the end until the rack has rack_size tiles or the bag runs out.
    pub fn replenish(&mut self, rack: &mut rack::Rack, rack_size: usize) {
        while rack.len() < rack_size {
            let Some(tile) = self.pop() else {
                break;
            };
            if !rack.push(tile) {
                self.0.push(tile);
                break;
            }
        }
    }
}
