// Copyright (C) 2020-2026 Andy Kurnia.

use lexdawg::{alphabet, analyzer, board, lexicon, movegen, rack};

fn cat_board() -> board::Board {
    let mut rows = vec!["...............".to_string(); 15];
    rows[7] = ".......CAT.....".to_string();
    board::Board::from_rows(&alphabet::ENGLISH_ALPHABET, board::STANDARD_DIM, &rows).unwrap()
}

fn lex() -> lexicon::Lexicon {
    lexicon::Lexicon::from_text(
        &alphabet::ENGLISH_ALPHABET,
        "cat\ncats\nERCAT\n\nat\n",
        lexicon::DEFAULT_MAX_LEN,
    )
    .unwrap()
}

#[test]
fn cats_and_ercat_through_the_public_api() {
    let a = &alphabet::ENGLISH_ALPHABET;
    let lex = lex();
    let mut board = cat_board();
    let cross_checks = analyzer::compute_cross_checks(lex.forward(), &mut board);
    assert_eq!(board.num_tiles(), 3);

    let right = movegen::generate_word_right(
        board::Coord::new(7, 10),
        rack::Rack::parse(a, "S").unwrap(),
        &board,
        &cross_checks,
        lex.forward(),
    );
    assert_eq!(right.len(), 1);
    assert_eq!(a.fmt_word(&right[0].word), "CATS");
    assert_eq!(a.fmt_word(&right[0].placed), "S");

    let left = movegen::generate_word_left(
        board::Coord::new(7, 6),
        rack::Rack::parse(a, "ER").unwrap(),
        &board,
        &cross_checks,
        lex.reversed(),
    );
    assert_eq!(left.len(), 1);
    assert_eq!(a.fmt_word(&left[0].word), "ERCAT");
    assert_eq!(a.fmt_word(&left[0].placed), "ER");
    assert_eq!(left[0].start, board::Coord::new(7, 5));
}

#[test]
fn saved_lexicon_finds_the_same_moves() {
    let a = &alphabet::ENGLISH_ALPHABET;
    let lex = lex();
    let loaded = lexicon::Lexicon::from_bytes_alloc(&lex.to_bytes().unwrap()).unwrap();
    let rack = rack::Rack::parse(a, "SER").unwrap();
    let mut board = cat_board();
    let expected = movegen::gen_candidates(&lex, &mut board.clone(), rack);
    let found = movegen::gen_candidates(&loaded, &mut board, rack);
    assert_eq!(found, expected);
    assert!(found.iter().any(|m| a.fmt_word(&m.word) == "ERCAT"));
}
