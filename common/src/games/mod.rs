mod grid;
mod presenter;
mod session_rng;
mod tick_task;
mod types;

pub mod game2048;
pub mod snake;
pub mod tetris;
pub mod tictactoe;

pub use grid::Grid;
pub use presenter::{GameKind, GamePresenter, GameSummary, GameView};
pub use session_rng::{SessionRng, random_seed};
pub use tick_task::TickTask;
pub use types::{Direction, Point};
