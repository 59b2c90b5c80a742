use std::fmt;

use super::types::{BOARD_SIDE, CELL_COUNT, Mark};
use super::win_detector::{check_win, is_board_full};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(self)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }

    pub fn is_full(&self) -> bool {
        is_board_full(self)
    }

    /// Copy of this board with `mark` written at `index`; `self` is untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            let labels: Vec<String> = (0..BOARD_SIDE)
                .map(|col| {
                    let index = row * BOARD_SIDE + col;
                    match self.cells[index] {
                        Mark::Empty => (index + 1).to_string(),
                        mark => mark.symbol().to_string(),
                    }
                })
                .collect();
            writeln!(f, " {} ", labels.join(" | "))?;
            if row + 1 < BOARD_SIDE {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}
