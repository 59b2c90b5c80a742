use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, OPPONENT_MARK, PLAYER_MARK, Position};

const WIN_SCORE: i32 = 10;

/// Move for the side currently to play, if that side is the bot.
pub fn calculate_move(state: &TicTacToeGameState) -> Option<Position> {
    if state.status != GameStatus::OpponentTurn {
        return None;
    }
    best_move(&state.board).and_then(Position::from_index)
}

/// Best cell for `OPPONENT_MARK`, or `None` when the board is already decided.
///
/// Candidates are scanned in ascending index order and only a strictly
/// greater score replaces the current pick, so ties go to the lowest index.
pub fn best_move(board: &Board) -> Option<usize> {
    if board.winner().is_some() {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        let child = board.with_mark(index, OPPONENT_MARK);
        let score = evaluate(&child, 0, false);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive minimax score of `board` from the bot's point of view.
///
/// `depth` counts half-moves since the search started; wins score
/// `10 - depth` and losses `depth - 10`, so quicker wins and slower
/// losses are preferred.
pub fn evaluate(board: &Board, depth: i32, is_maximizing: bool) -> i32 {
    match board.winner() {
        Some(OPPONENT_MARK) => return WIN_SCORE - depth,
        Some(PLAYER_MARK) => return depth - WIN_SCORE,
        _ => {}
    }

    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { OPPONENT_MARK } else { PLAYER_MARK };
    let scores = board.available_moves().into_iter().map(|index| {
        let child = board.with_mark(index, mark);
        evaluate(&child, depth + 1, !is_maximizing)
    });

    if is_maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
