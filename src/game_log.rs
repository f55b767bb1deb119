// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_state, stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

impl Outcome {
    // also the tie-break order for most wins
    pub const ALL: [Outcome; 3] = [Outcome::Player1, Outcome::Player2, Outcome::Draw];
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Player1 => "Player1",
            Outcome::Player2 => "Player2",
            Outcome::Draw => "Draw",
        })
    }
}

// One row of a self-play log.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    #[serde(rename = "Game")]
    pub game: u64,
    #[serde(rename = "Player 1 Total Score")]
    pub player1_score: i32,
    #[serde(rename = "Player 2 Total Score")]
    pub player2_score: i32,
    #[serde(rename = "Player 1 Words")]
    pub player1_words: String,
    #[serde(rename = "Player 2 Words")]
    pub player2_words: String,
    #[serde(rename = "Winner")]
    pub winner: Outcome,
}

impl GameRecord {
    pub fn from_game(game: u64, game_state: &game_state::GameState<'_>) -> Self {
        Self {
            game,
            player1_score: game_state.players[0].score,
            player2_score: game_state.players[1].score,
            player1_words: game_state.players[0].words.join(" "),
            player2_words: game_state.players[1].words.join(" "),
            winner: game_state.outcome(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Summary {
    pub num_games: u64,
    pub scores: [stats::Stats; 2],
    pub wins: [u64; 3], // indexed like Outcome::ALL
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            num_games: 0,
            scores: [stats::Stats::new(), stats::Stats::new()],
            wins: [0; 3],
        }
    }
}

impl Summary {
    pub fn add(&mut self, record: &GameRecord) {
        self.num_games += 1;
        self.scores[0].update(record.player1_score as f64);
        self.scores[1].update(record.player2_score as f64);
        if let Some(i) = Outcome::ALL.iter().position(|&o| o == record.winner) {
            self.wins[i] += 1;
        }
    }

    // Folds in a summary kept elsewhere, such as by another worker.
    pub fn merge(&mut self, other: &Summary) {
        self.num_games += other.num_games;
        for (s, o) in self.scores.iter_mut().zip(other.scores.iter()) {
            s.update_bulk(o);
        }
        for (w, o) in self.wins.iter_mut().zip(other.wins.iter()) {
            *w += o;
        }
    }

    #[inline(always)]
    pub fn wins_of(&self, outcome: Outcome) -> u64 {
        Outcome::ALL
            .iter()
            .position(|&o| o == outcome)
            .map_or(0, |i| self.wins[i])
    }

    // Earliest in Outcome::ALL on ties.
    pub fn most_wins(&self) -> (Outcome, u64) {
        let mut best = 0;
        for i in 1..Outcome::ALL.len() {
            if self.wins[i] > self.wins[best] {
                best = i;
            }
        }
        (Outcome::ALL[best], self.wins[best])
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games: {}", self.num_games)?;
        for (i, s) in self.scores.iter().enumerate() {
            writeln!(
                f,
                "player {}: average {:.3} sd {:.3} min {} max {}",
                i + 1,
                s.mean(),
                s.standard_deviation(),
                s.min().unwrap_or(0.0),
                s.max().unwrap_or(0.0)
            )?;
        }
        for outcome in Outcome::ALL {
            writeln!(f, "{}: {}", outcome, self.wins_of(outcome))?;
        }
        let (outcome, count) = self.most_wins();
        write!(f, "most wins: {outcome} ({count})")
    }
}

// Reads a log written by the self-play runner.
pub fn summarize<R: std::io::Read>(r: R) -> error::Returns<Summary> {
    let mut summary = Summary::default();
    let mut csv_reader = csv::Reader::from_reader(r);
    for (row, result) in (1..).zip(csv_reader.deserialize::<GameRecord>()) {
        match result {
            Ok(record) => summary.add(&record),
            Err(e) => {
                return_error!(Game, format!("row {row}: {e}"));
            }
        }
    }
    if summary.num_games == 0 {
        return_error!(Game, "no games in log".to_string());
    }
    Ok(summary)
}
