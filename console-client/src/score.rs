use std::fmt;

use common::tictactoe::GameStatus;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round; non-terminal statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::PlayerWon => self.player_wins += 1,
            GameStatus::OpponentWon => self.opponent_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::PlayerTurn | GameStatus::OpponentTurn => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scores - You: {}, AI: {}, Draws: {}",
            self.player_wins, self.opponent_wins, self.draws
        )
    }
}
