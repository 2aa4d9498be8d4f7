mod game_state;
mod piece;
mod session;
mod settings;
mod types;

pub use game_state::{
    LINES_PER_LEVEL, POINTS_PER_LINE, TetrisGameState, TetrisTickOutcome,
};
pub use piece::{Piece, PieceKind};
pub use session::{TetrisSession, TetrisSessionState};
pub use settings::TetrisSettings;
pub use types::{TetrisCommand, TetrisStatus, TetrisView};
