use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::game_state::Game2048State;
use super::settings::Game2048Settings;
use super::types::{Game2048Command, Game2048Status};
use crate::config::Validate;
use crate::games::presenter::{GameKind, GamePresenter, GameSummary, GameView};
use crate::games::session_rng::SessionRng;
use crate::log;
use crate::scores::{ScoreKey, ScoreStore};

#[derive(Clone)]
pub struct Game2048SessionState {
    pub game_state: Arc<Mutex<Game2048State>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub scores: ScoreStore,
    pub seed: u64,
}

impl Game2048SessionState {
    pub fn create(
        settings: &Game2048Settings,
        scores: ScoreStore,
        seed: u64,
    ) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let game_state = Game2048State::new(settings, &mut rng);

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            scores,
            seed,
        })
    }
}

pub struct Game2048Session;

impl Game2048Session {
    /// Drives one 2048 session until the command channel closes or the
    /// player quits. Unchanged moves and moves after game over are dropped
    /// without re-presenting.
    pub async fn run<P: GamePresenter>(
        state: Game2048SessionState,
        presenter: P,
        command_rx: &mut mpsc::UnboundedReceiver<Game2048Command>,
    ) -> GameSummary {
        Self::present_current(&state, &presenter).await;

        while let Some(command) = command_rx.recv().await {
            match command {
                Game2048Command::Move(direction) => {
                    let (changed, score, status) = {
                        let mut game_state = state.game_state.lock().await;
                        let mut rng = state.rng.lock().await;
                        let changed = game_state.apply_move(direction, &mut rng);
                        (changed, game_state.score(), game_state.status())
                    };

                    if !changed {
                        continue;
                    }

                    if state.scores.record(ScoreKey::Game2048, score) {
                        log!("New 2048 best score: {}", score);
                    }
                    Self::present_current(&state, &presenter).await;

                    if status == Game2048Status::GameOver {
                        log!("2048 game over with score {}", score);
                        presenter
                            .present_game_over(Self::build_summary(&state).await)
                            .await;
                    }
                }
                Game2048Command::NewGame => {
                    {
                        let mut game_state = state.game_state.lock().await;
                        let mut rng = state.rng.lock().await;
                        game_state.reset(&mut rng);
                    }
                    Self::present_current(&state, &presenter).await;
                }
                Game2048Command::Quit => break,
            }
        }

        Self::build_summary(&state).await
    }

    async fn present_current<P: GamePresenter>(state: &Game2048SessionState, presenter: &P) {
        let view = {
            let game_state = state.game_state.lock().await;
            game_state.to_view(state.scores.best(ScoreKey::Game2048))
        };
        presenter.present(GameView::Game2048(view)).await;
    }

    async fn build_summary(state: &Game2048SessionState) -> GameSummary {
        let game_state = state.game_state.lock().await;
        let outcome = match game_state.status() {
            Game2048Status::GameOver => "No moves left".to_string(),
            Game2048Status::InProgress => "In progress".to_string(),
        };
        GameSummary {
            game: GameKind::Game2048,
            outcome,
            score: game_state.score(),
            best_score: Some(state.scores.best(ScoreKey::Game2048)),
        }
    }
}
