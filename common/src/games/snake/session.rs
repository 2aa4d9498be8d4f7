use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::game_state::{SnakeGameState, SnakeTickOutcome};
use super::settings::SnakeSettings;
use super::types::{DeathReason, SnakeCommand};
use crate::config::Validate;
use crate::games::presenter::{GameKind, GamePresenter, GameSummary, GameView};
use crate::games::session_rng::SessionRng;
use crate::games::tick_task::TickTask;
use crate::log;
use crate::scores::{ScoreKey, ScoreStore};

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub scores: ScoreStore,
    pub seed: u64,
}

impl SnakeSessionState {
    pub fn create(settings: &SnakeSettings, scores: ScoreStore, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let game_state = SnakeGameState::new(settings, &mut rng);

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            scores,
            seed,
        })
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one snake session until the command channel closes or the
    /// player quits. The session owns the single gravity timer; eating
    /// re-arms it at the new speed and death cancels it.
    pub async fn run<P: GamePresenter>(
        state: SnakeSessionState,
        presenter: P,
        command_rx: &mut mpsc::UnboundedReceiver<SnakeCommand>,
    ) -> GameSummary {
        // The sender is kept alive here so the tick channel only closes
        // when the session ends, not when the timer is cancelled.
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let mut tick_task = TickTask::new();
        {
            let game_state = state.game_state.lock().await;
            tick_task.start(game_state.tick_interval(), tick_tx.clone());
        }
        Self::present_current(&state, &presenter).await;

        loop {
            tokio::select! {
                Some(()) = tick_rx.recv() => {
                    let (outcome, score, interval_before, interval_after) = {
                        let mut game_state = state.game_state.lock().await;
                        let mut rng = state.rng.lock().await;
                        let interval_before = game_state.tick_interval();
                        let outcome = game_state.tick(&mut rng);
                        (outcome, game_state.score(), interval_before, game_state.tick_interval())
                    };

                    match outcome {
                        SnakeTickOutcome::Ignored => {}
                        SnakeTickOutcome::Moved => {
                            Self::present_current(&state, &presenter).await;
                        }
                        SnakeTickOutcome::Ate => {
                            if state.scores.record(ScoreKey::Snake, score) {
                                log!("New snake high score: {}", score);
                            }
                            if interval_after != interval_before {
                                tick_task.start(interval_after, tick_tx.clone());
                            }
                            Self::present_current(&state, &presenter).await;
                        }
                        SnakeTickOutcome::Died(reason) => {
                            tick_task.cancel();
                            log!("Snake died ({:?}) with score {}", reason, score);
                            Self::present_current(&state, &presenter).await;
                            presenter
                                .present_game_over(Self::build_summary(&state).await)
                                .await;
                        }
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        None => break,
                        Some(SnakeCommand::ChangeDirection(direction)) => {
                            let mut game_state = state.game_state.lock().await;
                            game_state.set_direction(direction);
                        }
                        Some(SnakeCommand::NewGame) => {
                            let interval = {
                                let mut game_state = state.game_state.lock().await;
                                let mut rng = state.rng.lock().await;
                                game_state.reset(&mut rng);
                                game_state.tick_interval()
                            };
                            tick_task.start(interval, tick_tx.clone());
                            Self::present_current(&state, &presenter).await;
                        }
                        Some(SnakeCommand::Quit) => break,
                    }
                }
            }
        }

        tick_task.cancel();
        Self::build_summary(&state).await
    }

    async fn present_current<P: GamePresenter>(state: &SnakeSessionState, presenter: &P) {
        let view = {
            let game_state = state.game_state.lock().await;
            game_state.to_view(state.scores.best(ScoreKey::Snake))
        };
        presenter.present(GameView::Snake(view)).await;
    }

    async fn build_summary(state: &SnakeSessionState) -> GameSummary {
        let game_state = state.game_state.lock().await;
        let outcome = match game_state.death_reason() {
            Some(DeathReason::WallCollision) => "Hit the wall".to_string(),
            Some(DeathReason::SelfCollision) => "Ran into itself".to_string(),
            None => "In progress".to_string(),
        };
        GameSummary {
            game: GameKind::Snake,
            outcome,
            score: game_state.score(),
            best_score: Some(state.scores.best(ScoreKey::Snake)),
        }
    }
}
