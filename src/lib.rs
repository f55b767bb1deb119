// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod analyzer;
pub mod autoplay;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod display;
pub mod game_config;
pub mod game_log;
pub mod game_state;
pub mod graph;
pub mod lexicon;
pub mod move_picker;
pub mod movegen;
pub mod play_scorer;
pub mod rack;
pub mod stats;
