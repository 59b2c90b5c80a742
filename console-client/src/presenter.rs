use std::io::{BufRead, Write};

use common::tictactoe::{Board, CELL_COUNT, GameStatus, WinningLine};

use crate::score::ScoreTally;

/// What a front end must provide to host a round against the engine.
pub trait GamePresenter {
    fn render_board(&mut self, board: &Board);

    /// Index of an empty cell chosen by the human, or `None` to quit.
    fn accept_move(&mut self, board: &Board) -> Option<usize>;

    fn announce_opponent_thinking(&mut self);

    fn report_outcome(
        &mut self,
        status: GameStatus,
        winning_line: Option<&WinningLine>,
        tally: Option<&ScoreTally>,
    );

    fn ask_play_again(&mut self) -> bool;
}

pub struct ConsolePresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn greet(&mut self) {
        let _ = writeln!(self.output, "Welcome to Tic Tac Toe!");
        let _ = writeln!(self.output, "You are X, AI is O");
        let _ = writeln!(self.output, "Enter position (1-9) to make your move\n");
    }

    pub fn farewell(&mut self) {
        let _ = writeln!(self.output, "Thanks for playing!");
        let _ = self.output.flush();
    }

    /// `None` once the output is gone or the input is exhausted.
    fn prompt(&mut self, text: &str) -> Option<String> {
        write!(self.output, "{}", text).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GamePresenter for ConsolePresenter<R, W> {
    fn render_board(&mut self, board: &Board) {
        let _ = writeln!(self.output, "\n\n{}\n", board);
    }

    fn accept_move(&mut self, board: &Board) -> Option<usize> {
        loop {
            let answer = self.prompt("Your move (1-9): ")?;
            if answer.eq_ignore_ascii_case("q") {
                return None;
            }

            let Ok(number) = answer.parse::<usize>() else {
                let _ = writeln!(self.output, "Please enter a number between 1 and 9");
                continue;
            };

            if (1..=CELL_COUNT).contains(&number) && board.is_empty_at(number - 1) {
                return Some(number - 1);
            }
            let _ = writeln!(self.output, "Invalid move! Try again.");
        }
    }

    fn announce_opponent_thinking(&mut self) {
        let _ = writeln!(self.output, "AI is thinking...");
        let _ = self.output.flush();
    }

    fn report_outcome(
        &mut self,
        status: GameStatus,
        winning_line: Option<&WinningLine>,
        tally: Option<&ScoreTally>,
    ) {
        let message = match status {
            GameStatus::PlayerWon => "You Win!",
            GameStatus::OpponentWon => "AI Wins!",
            GameStatus::Draw => "Draw!",
            GameStatus::PlayerTurn | GameStatus::OpponentTurn => return,
        };
        let _ = writeln!(self.output, "{}", message);
        if let Some(line) = winning_line {
            let cells: Vec<String> = line.cells.iter().map(|c| (c + 1).to_string()).collect();
            let _ = writeln!(
                self.output,
                "Winning line ({}): {}",
                line.mark.symbol(),
                cells.join("-")
            );
        }
        if let Some(tally) = tally {
            let _ = writeln!(self.output, "{}", tally);
        }
    }

    fn ask_play_again(&mut self) -> bool {
        match self.prompt("Play again? (yes/no): ") {
            Some(answer) => {
                let answer = answer.to_lowercase();
                answer == "y" || answer == "yes"
            }
            None => false,
        }
    }
}
