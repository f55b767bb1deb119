// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, graph};

pub const DEFAULT_MAX_LEN: usize = 15;

// One word per line. Blank lines are skipped, case is folded, and words longer
// than max_len are dropped. Sorted and deduplicated.
pub fn read_machine_words(
    alphabet: &alphabet::Alphabet<'_>,
    text: &str,
    max_len: usize,
) -> error::Returns<Box<[Box<[u8]>]>> {
    let mut machine_words = Vec::<Box<[u8]>>::new();
    let mut num_too_long = 0usize;
    for (line_num, line) in (1..).zip(text.lines()) {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let machine_word = match alphabet.parse_word(word) {
            Ok(x) => x,
            Err(e) => {
                return_error!(Lexicon, format!("line {line_num}: {e}"));
            }
        };
        if machine_word.len() > max_len {
            num_too_long += 1;
            continue;
        }
        machine_words.push(machine_word);
    }
    machine_words.sort_unstable();
    machine_words.dedup();
    log::debug!(
        "read {} words, dropped {} longer than {}",
        machine_words.len(),
        num_too_long,
        max_len
    );
    Ok(machine_words.into_boxed_slice())
}

// The forward graph answers membership and drives rightward extension. The
// reversed graph holds every word spelled backwards for leftward extension.
#[derive(Clone, Debug)]
pub struct Lexicon {
    forward: graph::WordGraph,
    reversed: graph::WordGraph,
}

impl Lexicon {
    pub fn from_machine_words(machine_words: &[Box<[u8]>]) -> error::Returns<Self> {
        let mut forward = graph::WordGraph::new();
        let mut reversed = graph::WordGraph::new();
        let mut buf = Vec::new();
        for w in machine_words {
            forward.insert(w)?;
            buf.clear();
            buf.extend(w.iter().rev());
            reversed.insert(&buf)?;
        }
        forward.minimize();
        reversed.minimize();
        log::debug!(
            "lexicon: {} words, {} forward nodes, {} reversed nodes",
            machine_words.len(),
            forward.len(),
            reversed.len()
        );
        Ok(Self { forward, reversed })
    }

    pub fn from_text(
        alphabet: &alphabet::Alphabet<'_>,
        text: &str,
        max_len: usize,
    ) -> error::Returns<Self> {
        Self::from_machine_words(&read_machine_words(alphabet, text, max_len)?)
    }

    #[inline(always)]
    pub fn forward(&self) -> &graph::WordGraph {
        &self.forward
    }

    #[inline(always)]
    pub fn reversed(&self) -> &graph::WordGraph {
        &self.reversed
    }

    #[inline(always)]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.forward.search_terminal(word)
    }

    pub fn to_bytes(&self) -> error::Returns<Vec<u8>> {
        let forward = self.forward.to_bytes()?;
        let reversed = self.reversed.to_bytes()?;
        let mut ret = Vec::with_capacity(4 + forward.len() + reversed.len());
        ret.extend_from_slice(&(forward.len() as u32).to_le_bytes());
        ret.extend_from_slice(&forward);
        ret.extend_from_slice(&reversed);
        Ok(ret)
    }

    pub fn from_bytes_alloc(buf: &[u8]) -> error::Returns<Self> {
        if buf.len() < 4 {
            return_error!(Graph, "lexicon file too short".to_string());
        }
        let forward_len = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
        let rest = &buf[4..];
        if forward_len > rest.len() {
            return_error!(
                Graph,
                format!("forward graph needs {forward_len} bytes, only {} left", rest.len())
            );
        }
        let forward = graph::WordGraph::from_bytes_alloc(&rest[..forward_len])?;
        let reversed = graph::WordGraph::from_bytes_alloc(&rest[forward_len..])?;
        if forward.count_words() != reversed.count_words() {
            return_error!(
                Graph,
                "forward and reversed graphs disagree".to_string()
            );
        }
        // same count, so every forward word spelled backwards must be there
        let mut missing = None;
        let mut buf = Vec::new();
        forward.for_each_word(|w| {
            if missing.is_none() {
                buf.clear();
                buf.extend(w.iter().rev());
                if !reversed.search_terminal(&buf) {
                    missing = Some(w.to_vec());
                }
            }
        });
        if let Some(w) = missing {
            return_error!(
                Graph,
                format!("reversed graph lacks the reversal of {w:?}")
            );
        }
        Ok(Self { forward, reversed })
    }
}

#[cfg(test)]
pub(crate) fn make_lexicon(words: &[&str]) -> Lexicon {
    Lexicon::from_text(
        &alphabet::ENGLISH_ALPHABET,
        &words.join("\n"),
        DEFAULT_MAX_LEN,
    )
    .unwrap()
}
