mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{best_move, calculate_move, evaluate};
pub use game_state::TicTacToeGameState;
pub use types::{
    BOARD_SIDE, CELL_COUNT, GameStatus, Mark, OPPONENT_MARK, PLAYER_MARK, Position, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_board_full};

pub fn winner(board: &Board) -> Option<Mark> {
    check_win(board)
}

pub fn is_full(board: &Board) -> bool {
    is_board_full(board)
}
