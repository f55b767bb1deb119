// Copyright (C) 2020-2026 Andy Kurnia.

use super::{analyzer, board, game_config, graph, lexicon, play_scorer, rack};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

// A candidate from one anchor search. Every tile sequence is in reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub fixed: Box<[u8]>,  // board tiles next to the anchor on the fixed side
    pub placed: Box<[u8]>, // rack tiles, at least one
    pub word: Box<[u8]>,
    pub anchor: board::Coord,
    pub direction: Direction,
    pub start: board::Coord,
}

impl Move {
    #[inline(always)]
    pub fn end_col(&self) -> i8 {
        self.start.col + self.word.len() as i8
    }
}

struct Env<'a> {
    board: &'a board::Board,
    cross_checks: &'a analyzer::CrossCheckTable,
    graph: &'a graph::WordGraph,
    anchor: board::Coord,
    direction: Direction,
    fixed: &'a [u8],
    word: Vec<u8>,   // in search orientation
    placed: Vec<u8>, // in search orientation
    moves: Vec<Move>,
}

impl Env<'_> {
    // next_col is the first square past the word in the search direction.
    fn record(&mut self, next_col: i8) {
        let (word, placed, start_col) = match self.direction {
            Direction::Right => (
                self.word.clone(),
                self.placed.clone(),
                next_col - self.word.len() as i8,
            ),
            Direction::Left => (
                self.word.iter().rev().copied().collect(),
                self.placed.iter().rev().copied().collect(),
                next_col + 1,
            ),
        };
        self.moves.push(Move {
            fixed: self.fixed.into(),
            placed: placed.into_boxed_slice(),
            word: word.into_boxed_slice(),
            anchor: self.anchor,
            direction: self.direction,
            start: board::Coord::new(self.anchor.row, start_col),
        });
    }
}

fn extend(env: &mut Env<'_>, col: i8, p: graph::NodeIndex, rack: rack::Rack) {
    let row = env.anchor.row;
    let step = match env.direction {
        Direction::Right => 1,
        Direction::Left => -1,
    };
    match env.board.get(row, col) {
        Some(b) if b != board::EMPTY => {
            // play through
            if let Some(q) = env.graph.seek(p, b) {
                env.word.push(b);
                extend(env, col + step, q, rack);
                env.word.pop();
            }
        }
        cell => {
            if !env.placed.is_empty() && env.graph.accepts(p) && env.graph.search_terminal(&env.word)
            {
                env.record(col);
            }
            if cell.is_none() {
                return;
            }
            let cross_check = env.cross_checks.get(row, col);
            for tile in rack.distinct() {
                if !cross_check.contains(tile) {
                    continue;
                }
                if let Some(q) = env.graph.seek(p, tile) {
                    env.word.push(tile);
                    env.placed.push(tile);
                    extend(env, col + step, q, rack.without(tile));
                    env.placed.pop();
                    env.word.pop();
                }
            }
        }
    }
}

// Words that start with the tiles left of the anchor (if any) and continue
// through the anchor to the right.
pub fn generate_word_right(
    anchor: board::Coord,
    rack: rack::Rack,
    board: &board::Board,
    cross_checks: &analyzer::CrossCheckTable,
    forward: &graph::WordGraph,
) -> Vec<Move> {
    let row = anchor.row;
    let mut first_col = anchor.col;
    while board.is_occupied(row, first_col - 1) {
        first_col -= 1;
    }
    let fixed = (first_col..anchor.col)
        .map(|col| board.at(row, col))
        .collect::<Vec<_>>();
    let Some(p) = forward.walk(forward.root(), &fixed) else {
        return Vec::new();
    };
    let mut env = Env {
        board,
        cross_checks,
        graph: forward,
        anchor,
        direction: Direction::Right,
        fixed: &fixed,
        word: fixed.clone(),
        placed: Vec::new(),
        moves: Vec::new(),
    };
    extend(&mut env, anchor.col, p, rack);
    env.moves
}

// Words that end with the tiles right of the anchor (if any), built leftward
// through the anchor on the reversed graph.
pub fn generate_word_left(
    anchor: board::Coord,
    rack: rack::Rack,
    board: &board::Board,
    cross_checks: &analyzer::CrossCheckTable,
    reversed: &graph::WordGraph,
) -> Vec<Move> {
    let row = anchor.row;
    let mut last_col = anchor.col;
    while board.is_occupied(row, last_col + 1) {
        last_col += 1;
    }
    let fixed = (anchor.col + 1..=last_col)
        .map(|col| board.at(row, col))
        .collect::<Vec<_>>();
    let word = fixed.iter().rev().copied().collect::<Vec<_>>();
    let Some(p) = reversed.walk(reversed.root(), &word) else {
        return Vec::new();
    };
    let mut env = Env {
        board,
        cross_checks,
        graph: reversed,
        anchor,
        direction: Direction::Left,
        fixed: &fixed,
        word,
        placed: Vec::new(),
        moves: Vec::new(),
    };
    extend(&mut env, anchor.col, p, rack);
    env.moves
}

// A placement on the real board. Down plays have lane = column and idx = row
// of the first tile. A 0 in word is a tile already on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Play {
    Pass,
    Place {
        down: bool,
        lane: i8,
        idx: i8,
        word: Box<[u8]>,
    },
}

impl Play {
    // Rack tiles used.
    pub fn num_played(&self) -> usize {
        match self {
            Play::Pass => 0,
            Play::Place { word, .. } => word.iter().filter(|&&t| t != 0).count(),
        }
    }

    // Converts a candidate found on board (or on its transpose, when down).
    pub fn from_move(board: &board::Board, down: bool, m: &Move) -> Self {
        let word = (m.start.col..)
            .zip(m.word.iter())
            .map(|(col, &t)| {
                if board.at(m.start.row, col) != board::EMPTY {
                    0
                } else {
                    t
                }
            })
            .collect();
        Play::Place {
            down,
            lane: m.start.row,
            idx: m.start.col,
            word,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ValuedPlay {
    pub score: i16,
    pub play: Play,
}

// Every candidate for one board direction.
pub fn gen_candidates(
    lexicon: &lexicon::Lexicon,
    board: &mut board::Board,
    rack: rack::Rack,
) -> Vec<Move> {
    let anchors = analyzer::find_anchors(board);
    let cross_checks = analyzer::compute_cross_checks(lexicon.forward(), board);
    let mut moves = Vec::new();
    for &anchor in anchors.iter() {
        moves.extend(generate_word_right(
            anchor,
            rack,
            board,
            &cross_checks,
            lexicon.forward(),
        ));
        moves.extend(generate_word_left(
            anchor,
            rack,
            board,
            &cross_checks,
            lexicon.reversed(),
        ));
    }
    moves
}

// A single tile with no neighbour along the search lane is the same placement
// as the perpendicular one. Keep the orientation that reads a word of two or
// more tiles, or across when neither does.
fn is_lone_tile_twin(oriented: &board::Board, down: bool, m: &Move) -> bool {
    m.placed.len() == 1
        && m.word.len() == 1
        && (down
            || oriented.is_occupied(m.start.row - 1, m.start.col)
            || oriented.is_occupied(m.start.row + 1, m.start.col))
}

#[derive(Default)]
pub struct MoveGenerator {
    pub plays: Vec<ValuedPlay>,
    seen: std::collections::HashSet<Play>,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    // Fills plays with every distinct placement, best score first.
    pub fn gen_moves(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        lexicon: &lexicon::Lexicon,
        board: &board::Board,
        rack: rack::Rack,
    ) {
        self.plays.clear();
        self.seen.clear();
        let mut num_candidates = 0;
        for down in [false, true] {
            let mut oriented = if down {
                board.transposed()
            } else {
                board.clone()
            };
            let moves = gen_candidates(lexicon, &mut oriented, rack);
            num_candidates += moves.len();
            for m in moves.iter() {
                if is_lone_tile_twin(&oriented, down, m) {
                    continue;
                }
                let play = Play::from_move(&oriented, down, m);
                if self.seen.insert(play.clone()) {
                    let score = play_scorer::compute_score(game_config, board, &play);
                    self.plays.push(ValuedPlay { score, play });
                }
            }
        }
        self.plays.sort_by(|a, b| b.score.cmp(&a.score));
        log::trace!(
            "{} candidates, {} distinct plays",
            num_candidates,
            self.plays.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, board::board_with_rows, lexicon::make_lexicon};
    use rand::prelude::*;

    fn fmt(w: &[u8]) -> String {
        alphabet::ENGLISH_ALPHABET.fmt_word(w)
    }

    fn rack_of(s: &str) -> rack::Rack {
        rack::Rack::parse(&alphabet::ENGLISH_ALPHABET, s).unwrap()
    }

    #[test]
    fn cats_from_the_right_of_cat() {
        let lex = make_lexicon(&["CAT", "CATS", "ERCAT", "AT"]);
        let mut board = board_with_rows(&[(7, 7, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(7, 10);
        let moves = generate_word_right(anchor, rack_of("S"), &board, &cc, lex.forward());
        assert_eq!(moves.len(), 1);
        let m = &moves[0];
        assert_eq!(fmt(&m.word), "CATS");
        assert_eq!(fmt(&m.placed), "S");
        assert_eq!(fmt(&m.fixed), "CAT");
        assert_eq!(m.start, board::Coord::new(7, 7));
        assert_eq!(m.direction, Direction::Right);
        assert_eq!(m.end_col(), 11);
    }

    #[test]
    fn full_rack_right_of_cat_makes_only_cats() {
        let lex = make_lexicon(&["CAT", "CATS", "CAR", "CARS", "DOG", "DOGS"]);
        let mut board = board_with_rows(&[(7, 7, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        assert!(cc.get(6, 7).is_empty());
        assert_eq!(cc.get(7, 0), analyzer::LetterSet::FULL);
        let anchor = board::Coord::new(7, 10);
        let moves = generate_word_right(anchor, rack_of("CATSREN"), &board, &cc, lex.forward());
        assert_eq!(moves.len(), 1);
        assert_eq!(fmt(&moves[0].word), "CATS");
        assert_eq!(fmt(&moves[0].placed), "S");
        assert_eq!(moves[0].start, board::Coord::new(7, 7));
    }

    #[test]
    fn ercat_from_the_left_of_cat() {
        let lex = make_lexicon(&["CAT", "CATS", "ERCAT", "AT"]);
        let mut board = board_with_rows(&[(7, 7, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(7, 6);
        let moves = generate_word_left(anchor, rack_of("RE"), &board, &cc, lex.reversed());
        assert_eq!(moves.len(), 1);
        let m = &moves[0];
        assert_eq!(fmt(&m.word), "ERCAT");
        assert_eq!(fmt(&m.placed), "ER");
        assert_eq!(fmt(&m.fixed), "CAT");
        assert_eq!(m.start, board::Coord::new(7, 5));
        assert_eq!(m.direction, Direction::Left);
    }

    #[test]
    fn fixed_part_must_be_a_path() {
        let lex = make_lexicon(&["CATS"]);
        let mut board = board_with_rows(&[(7, 7, "DOG")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(7, 10);
        assert!(generate_word_right(anchor, rack_of("S"), &board, &cc, lex.forward()).is_empty());
        let anchor = board::Coord::new(7, 6);
        assert!(generate_word_left(anchor, rack_of("S"), &board, &cc, lex.reversed()).is_empty());
    }

    #[test]
    fn duplicate_rack_letters_do_not_duplicate_moves() {
        let lex = make_lexicon(&["AA", "A"]);
        let mut board = board::Board::standard();
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(7, 7);
        let moves = generate_word_right(anchor, rack_of("AAA"), &board, &cc, lex.forward());
        let words = moves.iter().map(|m| fmt(&m.word)).collect::<Vec<_>>();
        assert_eq!(words, vec!["A", "AA"]);
    }

    #[test]
    fn words_may_touch_the_edge() {
        let lex = make_lexicon(&["CAT", "CATS"]);
        let mut board = board_with_rows(&[(3, 11, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(3, 14);
        let moves = generate_word_right(anchor, rack_of("S"), &board, &cc, lex.forward());
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end_col(), 15);
        let mut board = board_with_rows(&[(3, 1, "ATS")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(3, 0);
        let moves = generate_word_left(anchor, rack_of("C"), &board, &cc, lex.reversed());
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].start, board::Coord::new(3, 0));
    }

    #[test]
    fn extension_plays_through_board_tiles() {
        let lex = make_lexicon(&["SCATS", "CAT", "CATS", "SCAT"]);
        let mut board = board_with_rows(&[(7, 7, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchor = board::Coord::new(7, 6);
        let moves = generate_word_right(anchor, rack_of("SS"), &board, &cc, lex.forward());
        let mut words = moves
            .iter()
            .map(|m| (fmt(&m.word), fmt(&m.placed)))
            .collect::<Vec<_>>();
        words.sort();
        assert_eq!(
            words,
            vec![
                ("SCAT".to_string(), "S".to_string()),
                ("SCATS".to_string(), "SS".to_string())
            ]
        );
    }

    #[test]
    #[should_panic]
    fn stale_cross_checks_are_fatal() {
        let lex = make_lexicon(&["CAT"]);
        let mut other = board_with_rows(&[(7, 7, "CAT")]);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut other);
        let board = board::Board::standard();
        generate_word_right(
            board::Coord::new(7, 7),
            rack_of("CAT"),
            &board,
            &cc,
            lex.forward(),
        );
    }

    const WORDS: &[&str] = &[
        "AT", "CAT", "CATS", "SCAT", "ARE", "EAR", "TEA", "EAT", "SEA", "RAT", "STAR", "ARTS",
        "TSAR", "ST", "AS", "RE", "ES", "TE", "CAR", "ARC", "SCAR", "ACE", "RACE", "CARE",
    ];

    // Every word and its reversal, so that a mirrored board reads the same.
    fn closed_lexicon() -> lexicon::Lexicon {
        let mut words = WORDS.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        words.extend(WORDS.iter().map(|w| w.chars().rev().collect::<String>()));
        make_lexicon(&words.iter().map(|w| w.as_str()).collect::<Vec<_>>())
    }

    fn test_board() -> board::Board {
        board_with_rows(&[(7, 5, "CATS"), (5, 8, "AR"), (8, 8, "TEA"), (10, 2, "STAR")])
    }

    // Places m on a copy and checks every run it touches.
    fn assert_legal(lex: &lexicon::Lexicon, board: &board::Board, rack: rack::Rack, m: &Move) {
        let mut b = board.clone();
        let mut left = rack;
        let row = m.start.row;
        assert!(!m.placed.is_empty());
        let mut placed = Vec::new();
        for (col, &t) in (m.start.col..).zip(m.word.iter()) {
            if b.at(row, col) == board::EMPTY {
                assert!(left.take(t), "{:?} not in rack", fmt(&[t]));
                b.set(row, col, t);
                placed.push(t);
            } else {
                assert_eq!(b.at(row, col), t);
            }
        }
        assert_eq!(&placed[..], &m.placed[..]);
        assert!(!b.is_occupied(row, m.start.col - 1));
        assert!(!b.is_occupied(row, m.end_col()));
        assert!(lex.contains(&m.word), "{}", fmt(&m.word));
        let mut w = Vec::new();
        for col in m.start.col..m.end_col() {
            if board.at(row, col) == board::EMPTY {
                analyzer::collect_vertical_word(&b, row, col, &mut w);
                assert!(w.len() == 1 || lex.contains(&w), "{}", fmt(&w));
            }
        }
    }

    #[test]
    fn random_racks_yield_legal_moves() {
        let lex = closed_lexicon();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(20240601);
        let mut board = test_board();
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let anchors = analyzer::find_anchors(&board);
        let pool = alphabet::ENGLISH_ALPHABET
            .parse_word("AACEERSTTS")
            .unwrap();
        let mut num_moves = 0;
        for _ in 0..40 {
            let len = rng.random_range(1..=rack::MAX_RACK_SIZE);
            let tiles = (0..len)
                .map(|_| *pool.choose(&mut rng).unwrap())
                .collect::<Vec<_>>();
            let rack = rack::Rack::new(&tiles).unwrap();
            for &anchor in anchors.iter() {
                for m in generate_word_right(anchor, rack, &board, &cc, lex.forward())
                    .iter()
                    .chain(generate_word_left(anchor, rack, &board, &cc, lex.reversed()).iter())
                {
                    assert_legal(&lex, &board, rack, m);
                    num_moves += 1;
                }
            }
        }
        assert!(num_moves > 0);
    }

    fn mirrored(board: &board::Board) -> board::Board {
        let dim = board.dim();
        let mut ret = board::Board::new(dim);
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                ret.set(row, dim.cols - 1 - col, board.at(row, col));
            }
        }
        ret
    }

    #[test]
    fn left_mirrors_right() {
        let lex = closed_lexicon();
        let mut board = test_board();
        let mut mirror = mirrored(&board);
        let cc = analyzer::compute_cross_checks(lex.forward(), &mut board);
        let mcc = analyzer::compute_cross_checks(lex.forward(), &mut mirror);
        let rack = rack_of("ACERST");
        let last_col = board.dim().cols - 1;
        for anchor in analyzer::find_anchors(&board) {
            let manchor = board::Coord::new(anchor.row, last_col - anchor.col);
            let mut right = generate_word_right(anchor, rack, &board, &cc, lex.forward())
                .iter()
                .map(|m| {
                    let w = m.word.iter().rev().copied().collect::<Vec<_>>();
                    (fmt(&w), last_col + 1 - m.end_col())
                })
                .collect::<Vec<_>>();
            let mut left = generate_word_left(manchor, rack, &mirror, &mcc, lex.reversed())
                .iter()
                .map(|m| (fmt(&m.word), m.start.col))
                .collect::<Vec<_>>();
            right.sort();
            left.sort();
            assert_eq!(right, left, "anchor {anchor}");
        }
    }

    #[test]
    fn gen_moves_covers_both_directions() {
        let lex = make_lexicon(&["CAT", "CATS", "AT", "TA", "AS"]);
        let board = board_with_rows(&[(7, 7, "CAT")]);
        let config = game_config::make_common_game_config();
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&config, &lex, &board, rack_of("SA"));
        let plays = &move_generator.plays;
        assert!(!plays.is_empty());
        for w in plays.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
        // CAT(S) across, found from both sides but kept once.
        let cats = Play::Place {
            down: false,
            lane: 7,
            idx: 7,
            word: vec![0, 0, 0, 19].into_boxed_slice(),
        };
        assert_eq!(plays.iter().filter(|vp| vp.play == cats).count(), 1);
        // AT down, hooking the T from above.
        let at = Play::Place {
            down: true,
            lane: 9,
            idx: 6,
            word: vec![1, 0].into_boxed_slice(),
        };
        assert!(plays.iter().any(|vp| vp.play == at));
        assert_eq!(at.num_played(), 1);
    }

    #[test]
    fn lone_tile_is_listed_once() {
        let lex = make_lexicon(&["A", "AT", "CAT"]);
        let board = board_with_rows(&[(7, 7, "CAT")]);
        let config = game_config::make_common_game_config();
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&config, &lex, &board, rack_of("A"));
        let plays = &move_generator.plays;
        let across = Play::Place {
            down: false,
            lane: 6,
            idx: 9,
            word: vec![1].into_boxed_slice(),
        };
        let at = Play::Place {
            down: true,
            lane: 9,
            idx: 6,
            word: vec![1, 0].into_boxed_slice(),
        };
        assert!(!plays.iter().any(|vp| vp.play == across));
        let found = plays.iter().filter(|vp| vp.play == at).collect::<Vec<_>>();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 3);
        // every single-tile play covers a different square
        let mut squares = std::collections::HashSet::new();
        for vp in plays.iter().filter(|vp| vp.play.num_played() == 1) {
            let Play::Place {
                down,
                lane,
                idx,
                word,
            } = &vp.play
            else {
                panic!("not a placement");
            };
            let i = *idx + word.iter().position(|&t| t != 0).unwrap() as i8;
            let square = if *down { (i, *lane) } else { (*lane, i) };
            assert!(squares.insert(square), "{square:?} listed twice");
        }
    }

    #[test]
    fn lone_tile_on_empty_board_is_across() {
        let lex = make_lexicon(&["A"]);
        let config = game_config::make_common_game_config();
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&config, &lex, &board::Board::standard(), rack_of("A"));
        assert_eq!(move_generator.plays.len(), 1);
        assert_eq!(
            move_generator.plays[0].play,
            Play::Place {
                down: false,
                lane: 7,
                idx: 7,
                word: vec![1].into_boxed_slice(),
            }
        );
    }

    #[test]
    fn empty_board_has_moves_through_center() {
        let lex = make_lexicon(&["CAT"]);
        let board = board::Board::standard();
        let config = game_config::make_common_game_config();
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&config, &lex, &board, rack_of("TAC"));
        assert!(!move_generator.plays.is_empty());
        for vp in move_generator.plays.iter() {
            let Play::Place { lane, idx, word, .. } = &vp.play else {
                panic!("not a placement");
            };
            assert_eq!(*lane, 7);
            assert!(*idx <= 7 && *idx + word.len() as i8 > 7);
        }
    }

    #[test]
    fn no_candidates_is_empty() {
        let lex = make_lexicon(&["CAT"]);
        let board = board_with_rows(&[(7, 7, "CAT")]);
        let config = game_config::make_common_game_config();
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&config, &lex, &board, rack_of("QQ"));
        assert!(move_generator.plays.is_empty());
    }
}
