use std::time::Duration;

use common::log;
use common::tictactoe::{GameStatus, TicTacToeGameState};

use crate::config::ClientConfig;
use crate::presenter::GamePresenter;
use crate::score::ScoreTally;

pub struct SessionSettings {
    pub think_delay: Duration,
    pub show_scores: bool,
}

impl From<&ClientConfig> for SessionSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            think_delay: Duration::from_millis(config.opponent_think_delay_ms),
            show_scores: config.show_scores,
        }
    }
}

enum RoundResult {
    Finished(GameStatus),
    Abandoned,
}

/// Plays rounds until the human declines another one or input runs out.
pub fn run_session<P: GamePresenter>(presenter: &mut P, settings: &SessionSettings) -> ScoreTally {
    let mut tally = ScoreTally::new();
    let mut state = TicTacToeGameState::new();

    loop {
        log!("Starting round {}", tally.rounds() + 1);

        match play_round(presenter, &mut state, settings) {
            RoundResult::Finished(status) => {
                tally.record(status);
                presenter.render_board(&state.board);
                let shown_tally = settings.show_scores.then_some(&tally);
                let winning_line = state.winning_line();
                presenter.report_outcome(status, winning_line.as_ref(), shown_tally);
            }
            RoundResult::Abandoned => {
                log!("Round abandoned after {} moves", state.move_count);
                break;
            }
        }

        if !presenter.ask_play_again() {
            break;
        }
        state.reset();
    }

    log!(
        "Session finished: {} rounds, {} player wins, {} opponent wins, {} draws",
        tally.rounds(),
        tally.player_wins,
        tally.opponent_wins,
        tally.draws
    );
    tally
}

fn play_round<P: GamePresenter>(
    presenter: &mut P,
    state: &mut TicTacToeGameState,
    settings: &SessionSettings,
) -> RoundResult {
    while !state.is_over() {
        match state.status {
            GameStatus::PlayerTurn => {
                presenter.render_board(&state.board);
                let Some(index) = presenter.accept_move(&state.board) else {
                    return RoundResult::Abandoned;
                };
                if let Err(e) = state.place_player_mark(index) {
                    log!("Rejected player move {}: {}", index + 1, e);
                }
            }
            GameStatus::OpponentTurn => {
                presenter.announce_opponent_thinking();
                if !settings.think_delay.is_zero() {
                    std::thread::sleep(settings.think_delay);
                }
                if let Err(e) = state.play_opponent_turn() {
                    log!("Opponent could not move: {}", e);
                    return RoundResult::Abandoned;
                }
            }
            GameStatus::PlayerWon | GameStatus::OpponentWon | GameStatus::Draw => break,
        }
    }

    RoundResult::Finished(state.status)
}
