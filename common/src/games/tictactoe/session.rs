use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::game_state::TicTacToeGameState;
use super::types::{TicTacToeCommand, TicTacToeStatus};
use crate::games::presenter::{GameKind, GamePresenter, GameSummary, GameView};
use crate::log;

#[derive(Clone, Default)]
pub struct TicTacToeSessionState {
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
}

impl TicTacToeSessionState {
    pub fn create() -> Self {
        Self::default()
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one tic-tac-toe session until the command channel closes or
    /// a player quits. Rejected placements are logged and dropped.
    pub async fn run<P: GamePresenter>(
        state: TicTacToeSessionState,
        presenter: P,
        command_rx: &mut mpsc::UnboundedReceiver<TicTacToeCommand>,
    ) -> GameSummary {
        Self::present_current(&state, &presenter).await;

        while let Some(command) = command_rx.recv().await {
            match command {
                TicTacToeCommand::PlaceMark(index) => {
                    let (placed, status) = {
                        let mut game_state = state.game_state.lock().await;
                        let placed = game_state.place_mark(index);
                        (placed, game_state.status())
                    };

                    if let Err(reason) = placed {
                        log!("Ignoring move to cell {}: {}", index, reason);
                        continue;
                    }

                    Self::present_current(&state, &presenter).await;
                    if status != TicTacToeStatus::InProgress {
                        presenter
                            .present_game_over(Self::build_summary(&state).await)
                            .await;
                    }
                }
                TicTacToeCommand::NewGame => {
                    state.game_state.lock().await.reset();
                    Self::present_current(&state, &presenter).await;
                }
                TicTacToeCommand::Quit => break,
            }
        }

        Self::build_summary(&state).await
    }

    async fn present_current<P: GamePresenter>(state: &TicTacToeSessionState, presenter: &P) {
        let view = {
            let game_state = state.game_state.lock().await;
            game_state.to_view()
        };
        presenter.present(GameView::TicTacToe(view)).await;
    }

    async fn build_summary(state: &TicTacToeSessionState) -> GameSummary {
        let game_state = state.game_state.lock().await;
        let outcome = match game_state.status() {
            TicTacToeStatus::InProgress => "In progress".to_string(),
            TicTacToeStatus::XWon => "X won".to_string(),
            TicTacToeStatus::OWon => "O won".to_string(),
            TicTacToeStatus::Draw => "Draw".to_string(),
        };
        GameSummary {
            game: GameKind::TicTacToe,
            outcome,
            score: 0,
            best_score: None,
        }
    }
}
