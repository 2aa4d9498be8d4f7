mod game2048_runner;
mod snake_runner;
mod tetris_runner;
mod tictactoe_runner;

pub use game2048_runner::run_game2048;
pub use snake_runner::run_snake;
pub use tetris_runner::run_tetris;
pub use tictactoe_runner::run_tictactoe;
