use std::future::Future;

use super::game2048::Game2048View;
use super::snake::SnakeView;
use super::tetris::TetrisView;
use super::tictactoe::TicTacToeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Game2048,
    Snake,
    Tetris,
    TicTacToe,
}

impl GameKind {
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Game2048 => "2048",
            GameKind::Snake => "Snake",
            GameKind::Tetris => "Tetris",
            GameKind::TicTacToe => "Tic-Tac-Toe",
        }
    }
}

/// Snapshot of a running game, pushed to the presenter after every change.
#[derive(Debug, Clone)]
pub enum GameView {
    Game2048(Game2048View),
    Snake(SnakeView),
    Tetris(TetrisView),
    TicTacToe(TicTacToeView),
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub game: GameKind,
    pub outcome: String,
    pub score: u32,
    pub best_score: Option<u32>,
}

/// Output seam between game sessions and whatever renders them. Sessions only
/// ever push state through this trait; they never render themselves.
pub trait GamePresenter: Send + Sync + Clone + 'static {
    fn present(&self, view: GameView) -> impl Future<Output = ()> + Send;

    fn present_game_over(&self, summary: GameSummary) -> impl Future<Output = ()> + Send;
}
