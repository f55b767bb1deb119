// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, movegen, play_scorer};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePicker {
    Greedy,
    Random,
}

impl std::str::FromStr for MovePicker {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(MovePicker::Greedy),
            "random" => Ok(MovePicker::Random),
            _ => Err(error::new(
                error::Kind::Game,
                format!("unknown picker {s:?}, want greedy or random"),
            )),
        }
    }
}

impl std::fmt::Display for MovePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MovePicker::Greedy => "greedy",
            MovePicker::Random => "random",
        })
    }
}

impl MovePicker {
    // None when there is nothing to play.
    pub fn pick<'p, R: Rng + ?Sized>(
        &self,
        plays: &'p [movegen::ValuedPlay],
        rng: &mut R,
    ) -> Option<&'p movegen::ValuedPlay> {
        match self {
            MovePicker::Greedy => plays
                .iter()
                .reduce(|best, vp| if vp.score > best.score { vp } else { best }),
            MovePicker::Random => plays.choose(rng),
        }
    }
}

// Top n by score, at most one per main word. Ties keep their order.
pub fn best_unique_plays<'p>(
    plays: &'p [movegen::ValuedPlay],
    board: &board::Board,
    n: usize,
) -> Vec<&'p movegen::ValuedPlay> {
    let mut sorted = plays.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    let mut seen = std::collections::HashSet::new();
    let mut ret = Vec::with_capacity(n.min(sorted.len()));
    for vp in sorted {
        if ret.len() >= n {
            break;
        }
        let main_word = play_scorer::words_formed(board, &vp.play)
            .into_iter()
            .next()
            .unwrap_or_default();
        if seen.insert(main_word) {
            ret.push(vp);
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn across(idx: i8, word: &[u8], score: i16) -> movegen::ValuedPlay {
        movegen::ValuedPlay {
            score,
            play: movegen::Play::Place {
                down: false,
                lane: 7,
                idx,
                word: word.into(),
            },
        }
    }

    #[test]
    fn parse_pickers() {
        assert_eq!("Greedy".parse::<MovePicker>().unwrap(), MovePicker::Greedy);
        assert_eq!("random".parse::<MovePicker>().unwrap(), MovePicker::Random);
        assert!("best".parse::<MovePicker>().is_err());
        assert_eq!(MovePicker::Random.to_string(), "random");
    }

    #[test]
    fn greedy_takes_first_of_the_best() {
        let plays = vec![across(5, &[1, 20], 3), across(6, &[1, 20], 9), across(7, &[1, 20], 9)];
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        let best = MovePicker::Greedy.pick(&plays, &mut rng).unwrap();
        assert!(std::ptr::eq(best, &plays[1]));
        assert!(MovePicker::Greedy.pick(&[], &mut rng).is_none());
        assert!(MovePicker::Random.pick(&[], &mut rng).is_none());
        for _ in 0..10 {
            let vp = MovePicker::Random.pick(&plays, &mut rng).unwrap();
            assert!(plays.iter().any(|p| std::ptr::eq(p, vp)));
        }
    }

    #[test]
    fn unique_plays_skip_repeated_words() {
        let board = board::Board::standard();
        // AT twice at different places, then TA.
        let plays = vec![
            across(6, &[1, 20], 4),
            across(5, &[20, 1], 2),
            across(7, &[1, 20], 5),
        ];
        let best = best_unique_plays(&plays, &board, 2);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].score, 5);
        assert_eq!(best[1].score, 2);
        assert_eq!(best_unique_plays(&plays, &board, 10).len(), 2);
        assert!(best_unique_plays(&plays, &board, 0).is_empty());
    }
}
