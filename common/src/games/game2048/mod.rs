mod game_state;
mod session;
mod settings;
mod types;

pub use game_state::{Game2048State, shift_grid};
pub use session::{Game2048Session, Game2048SessionState};
pub use settings::Game2048Settings;
pub use types::{Game2048Command, Game2048Status, Game2048View};
