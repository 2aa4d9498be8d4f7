mod game_state;
mod session;
mod types;

pub use game_state::{CELL_COUNT, TicTacToeGameState};
pub use session::{TicTacToeSession, TicTacToeSessionState};
pub use types::{Mark, TicTacToeCommand, TicTacToeStatus, TicTacToeView};
