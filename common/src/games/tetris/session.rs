use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::game_state::{TetrisGameState, TetrisTickOutcome};
use super::settings::TetrisSettings;
use super::types::{TetrisCommand, TetrisStatus};
use crate::config::Validate;
use crate::games::presenter::{GameKind, GamePresenter, GameSummary, GameView};
use crate::games::session_rng::SessionRng;
use crate::games::tick_task::TickTask;
use crate::log;

#[derive(Clone)]
pub struct TetrisSessionState {
    pub game_state: Arc<Mutex<TetrisGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub seed: u64,
}

impl TetrisSessionState {
    pub fn create(settings: &TetrisSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let game_state = TetrisGameState::new(settings, &mut rng);

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            seed,
        })
    }
}

pub struct TetrisSession;

impl TetrisSession {
    /// Drives one tetris session until the command channel closes or the
    /// player quits. The gravity timer follows the level (1000ms / level):
    /// a level-up re-arms it immediately, pause cancels it, resume and
    /// new-game re-arm it.
    pub async fn run<P: GamePresenter>(
        state: TetrisSessionState,
        presenter: P,
        command_rx: &mut mpsc::UnboundedReceiver<TetrisCommand>,
    ) -> GameSummary {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let mut tick_task = TickTask::new();
        {
            let game_state = state.game_state.lock().await;
            tick_task.start(game_state.gravity_period(), tick_tx.clone());
        }
        Self::present_current(&state, &presenter).await;

        loop {
            tokio::select! {
                Some(()) = tick_rx.recv() => {
                    let outcome = {
                        let mut game_state = state.game_state.lock().await;
                        let mut rng = state.rng.lock().await;
                        game_state.gravity_tick(&mut rng)
                    };
                    Self::handle_drop_outcome(
                        &state,
                        &presenter,
                        &mut tick_task,
                        &tick_tx,
                        outcome,
                    )
                    .await;
                }
                command = command_rx.recv() => {
                    match command {
                        None => break,
                        Some(TetrisCommand::MoveLeft) => {
                            let changed = state.game_state.lock().await.move_left();
                            if changed {
                                Self::present_current(&state, &presenter).await;
                            }
                        }
                        Some(TetrisCommand::MoveRight) => {
                            let changed = state.game_state.lock().await.move_right();
                            if changed {
                                Self::present_current(&state, &presenter).await;
                            }
                        }
                        Some(TetrisCommand::Rotate) => {
                            let changed = state.game_state.lock().await.rotate();
                            if changed {
                                Self::present_current(&state, &presenter).await;
                            }
                        }
                        Some(TetrisCommand::SoftDrop) => {
                            let outcome = {
                                let mut game_state = state.game_state.lock().await;
                                let mut rng = state.rng.lock().await;
                                game_state.gravity_tick(&mut rng)
                            };
                            Self::handle_drop_outcome(
                                &state,
                                &presenter,
                                &mut tick_task,
                                &tick_tx,
                                outcome,
                            )
                            .await;
                        }
                        Some(TetrisCommand::HardDrop) => {
                            let outcome = {
                                let mut game_state = state.game_state.lock().await;
                                let mut rng = state.rng.lock().await;
                                game_state.hard_drop(&mut rng)
                            };
                            Self::handle_drop_outcome(
                                &state,
                                &presenter,
                                &mut tick_task,
                                &tick_tx,
                                outcome,
                            )
                            .await;
                        }
                        Some(TetrisCommand::Pause) => {
                            let changed = state.game_state.lock().await.set_paused(true);
                            if changed {
                                tick_task.cancel();
                                Self::present_current(&state, &presenter).await;
                            }
                        }
                        Some(TetrisCommand::Resume) => {
                            let (changed, period) = {
                                let mut game_state = state.game_state.lock().await;
                                (game_state.set_paused(false), game_state.gravity_period())
                            };
                            if changed {
                                tick_task.start(period, tick_tx.clone());
                                Self::present_current(&state, &presenter).await;
                            }
                        }
                        Some(TetrisCommand::NewGame) => {
                            let period = {
                                let mut game_state = state.game_state.lock().await;
                                let mut rng = state.rng.lock().await;
                                game_state.reset(&mut rng);
                                game_state.gravity_period()
                            };
                            tick_task.start(period, tick_tx.clone());
                            Self::present_current(&state, &presenter).await;
                        }
                        Some(TetrisCommand::Quit) => break,
                    }
                }
            }
        }

        tick_task.cancel();
        Self::build_summary(&state).await
    }

    async fn handle_drop_outcome<P: GamePresenter>(
        state: &TetrisSessionState,
        presenter: &P,
        tick_task: &mut TickTask,
        tick_tx: &mpsc::UnboundedSender<()>,
        outcome: TetrisTickOutcome,
    ) {
        match outcome {
            TetrisTickOutcome::Ignored => {}
            TetrisTickOutcome::Moved => {
                Self::present_current(state, presenter).await;
            }
            TetrisTickOutcome::Locked { lines_cleared } => {
                if lines_cleared > 0 {
                    let (score, level, period) = {
                        let game_state = state.game_state.lock().await;
                        (
                            game_state.score(),
                            game_state.level(),
                            game_state.gravity_period(),
                        )
                    };
                    log!(
                        "Cleared {} line(s), score {} at level {}",
                        lines_cleared,
                        score,
                        level
                    );
                    // The level may have advanced; the timer follows it
                    // right away.
                    tick_task.start(period, tick_tx.clone());
                }
                Self::present_current(state, presenter).await;
            }
            TetrisTickOutcome::GameOver => {
                tick_task.cancel();
                Self::present_current(state, presenter).await;
                let summary = Self::build_summary(state).await;
                log!("Tetris game over with score {}", summary.score);
                presenter.present_game_over(summary).await;
            }
        }
    }

    async fn present_current<P: GamePresenter>(state: &TetrisSessionState, presenter: &P) {
        let view = {
            let game_state = state.game_state.lock().await;
            game_state.to_view()
        };
        presenter.present(GameView::Tetris(view)).await;
    }

    async fn build_summary(state: &TetrisSessionState) -> GameSummary {
        let game_state = state.game_state.lock().await;
        let outcome = match game_state.status() {
            TetrisStatus::GameOver => "Board filled up".to_string(),
            TetrisStatus::InProgress => "In progress".to_string(),
        };
        GameSummary {
            game: GameKind::Tetris,
            outcome,
            score: game_state.score(),
            best_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::presenter::GameView;
    use crate::test_util::RecordingPresenter;
    use std::time::Duration;
    use tokio::time::timeout;

    fn test_session() -> TetrisSessionState {
        TetrisSessionState::create(&TetrisSettings::default(), 42).unwrap()
    }

    #[tokio::test]
    async fn test_moves_and_hard_drop_present_views() {
        let state = test_session();
        let presenter = RecordingPresenter::new();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        command_tx.send(TetrisCommand::MoveLeft).unwrap();
        command_tx.send(TetrisCommand::HardDrop).unwrap();
        command_tx.send(TetrisCommand::Quit).unwrap();

        let summary = TetrisSession::run(state, presenter.clone(), &mut command_rx).await;
        assert!(presenter.view_count() >= 3);
        assert_eq!(summary.game, GameKind::Tetris);
        assert_eq!(summary.best_score, None);

        let Some(GameView::Tetris(view)) = presenter.last_view() else {
            panic!("Expected a tetris view");
        };
        // One piece locked at the floor.
        assert!(view.cells.iter().any(|&v| v != 0));
    }

    #[tokio::test]
    async fn test_pause_stops_gravity() {
        let state = test_session();
        let presenter = RecordingPresenter::new();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        let state_clone = state.clone();
        let presenter_clone = presenter.clone();
        let handle = tokio::spawn(async move {
            TetrisSession::run(state_clone, presenter_clone, &mut command_rx).await
        });

        command_tx.send(TetrisCommand::Pause).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let views_when_paused = presenter.view_count();
        // Gravity runs at 1000ms; waiting 1.5s paused must not move the
        // piece or produce tick views.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(presenter.view_count(), views_when_paused);

        command_tx.send(TetrisCommand::Resume).unwrap();
        command_tx.send(TetrisCommand::Quit).unwrap();
        timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_repeated_hard_drops_reach_game_over() {
        let state = test_session();
        let presenter = RecordingPresenter::new();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        // A 10x20 board fills up well before 250 drops; once the game is
        // over the rest are ignored.
        for _ in 0..250 {
            command_tx.send(TetrisCommand::HardDrop).unwrap();
        }
        command_tx.send(TetrisCommand::Quit).unwrap();

        let summary = TetrisSession::run(state, presenter.clone(), &mut command_rx).await;
        assert_eq!(summary.outcome, "Board filled up");
        assert_eq!(presenter.summaries().len(), 1);
    }

    #[tokio::test]
    async fn test_new_game_after_game_over() {
        let state = test_session();
        let presenter = RecordingPresenter::new();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        for _ in 0..250 {
            command_tx.send(TetrisCommand::HardDrop).unwrap();
        }
        command_tx.send(TetrisCommand::NewGame).unwrap();
        command_tx.send(TetrisCommand::Quit).unwrap();

        let summary = TetrisSession::run(state, presenter, &mut command_rx).await;
        assert_eq!(summary.outcome, "In progress");
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn test_create_rejects_invalid_settings() {
        let settings = TetrisSettings {
            field_width: 2,
            field_height: 20,
        };
        assert!(TetrisSessionState::create(&settings, 42).is_err());
    }
}
