use super::board::Board;
use super::bot_controller::best_move;
use super::types::{GameStatus, Mark, OPPONENT_MARK, PLAYER_MARK, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::PlayerTurn,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn place_player_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }
        if self.status != GameStatus::PlayerTurn {
            return Err("Not your turn".to_string());
        }

        self.apply(index, PLAYER_MARK)
    }

    /// Runs the search and applies its answer; returns the chosen cell.
    pub fn play_opponent_turn(&mut self) -> Result<usize, String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }
        if self.status != GameStatus::OpponentTurn {
            return Err("Not your turn".to_string());
        }

        let index = best_move(&self.board).ok_or_else(|| "No legal move left".to_string())?;
        self.apply(index, OPPONENT_MARK)?;
        crate::log!("Opponent played cell {}", index + 1);
        Ok(index)
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.move_count += 1;

        self.check_game_over();

        if !self.status.is_terminal() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.status = match self.status {
            GameStatus::PlayerTurn => GameStatus::OpponentTurn,
            GameStatus::OpponentTurn => GameStatus::PlayerTurn,
            terminal => terminal,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = self.board.winner() {
            self.status = if winner_mark == PLAYER_MARK {
                GameStatus::PlayerWon
            } else {
                GameStatus::OpponentWon
            };
            crate::log!("Round over after {} moves: {:?}", self.move_count, self.status);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            crate::log!("Round over after {} moves: {:?}", self.move_count, self.status);
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::PlayerWon => Some(PLAYER_MARK),
            GameStatus::OpponentWon => Some(OPPONENT_MARK),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::PlayerTurn;
        self.last_move = None;
        self.move_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_starts_with_player() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.status, GameStatus::PlayerTurn);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        state.place_player_mark(4).unwrap();
        assert_eq!(state.status, GameStatus::OpponentTurn);
        assert_eq!(state.last_move, Some(4));

        let reply = state.play_opponent_turn().unwrap();
        assert_eq!(reply, 0);
        assert_eq!(state.board.get(0), Some(OPPONENT_MARK));
        assert_eq!(state.status, GameStatus::PlayerTurn);
        assert_eq!(state.move_count, 2);
    }

    #[test]
    fn test_rejects_out_of_turn_moves() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.play_opponent_turn(), Err("Not your turn".to_string()));

        state.place_player_mark(0).unwrap();
        assert_eq!(state.place_player_mark(1), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds_cells() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(
            state.place_player_mark(9),
            Err("Position out of bounds".to_string())
        );
        assert_eq!(state.status, GameStatus::PlayerTurn);

        state.place_player_mark(0).unwrap();
        state.play_opponent_turn().unwrap();
        assert_eq!(
            state.place_player_mark(4),
            Err("Cell is already marked".to_string())
        );
        assert_eq!(state.status, GameStatus::PlayerTurn);
    }

    #[test]
    fn test_first_empty_cell_player_loses() {
        let mut state = TicTacToeGameState::new();
        while !state.is_over() {
            let index = state.board.available_moves()[0];
            state.place_player_mark(index).unwrap();
            if !state.is_over() {
                state.play_opponent_turn().unwrap();
            }
        }

        assert_eq!(state.status, GameStatus::OpponentWon);
        assert_eq!(state.winner(), Some(OPPONENT_MARK));
        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, OPPONENT_MARK);
        assert_eq!(state.place_player_mark(8), Err("Game is already over".to_string()));
        assert_eq!(state.play_opponent_turn(), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_draw_is_detected() {
        let mut state = TicTacToeGameState::new();
        state.board = Board::from_cells([
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::Empty,
        ]);
        state.place_player_mark(8).unwrap();
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_reset_starts_new_round() {
        let mut state = TicTacToeGameState::new();
        state.place_player_mark(4).unwrap();
        state.play_opponent_turn().unwrap();
        state.reset();
        assert_eq!(state.status, GameStatus::PlayerTurn);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.move_count, 0);
    }
}
