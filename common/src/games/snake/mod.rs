mod game_state;
mod session;
mod settings;
mod types;

pub use game_state::{POINTS_PER_FOOD, SnakeGameState, SnakeTickOutcome};
pub use session::{SnakeSession, SnakeSessionState};
pub use settings::SnakeSettings;
pub use types::{DeathReason, SnakeCommand, SnakeStatus, SnakeView};
