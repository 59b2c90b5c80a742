use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The human always plays X and always moves first.
pub const PLAYER_MARK: Mark = Mark::X;
pub const OPPONENT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIDE, index % BOARD_SIDE))
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIDE + self.col
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; BOARD_SIDE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; BOARD_SIDE]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    PlayerTurn,
    OpponentTurn,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWon | GameStatus::OpponentWon | GameStatus::Draw
        )
    }
}
