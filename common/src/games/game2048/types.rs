use crate::games::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game2048Status {
    InProgress,
    GameOver,
}

/// Player input accepted by a 2048 session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game2048Command {
    Move(Direction),
    NewGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Game2048View {
    pub cells: Vec<u32>,
    pub width: usize,
    pub height: usize,
    pub score: u32,
    pub best_score: u32,
    pub moves_made: u32,
    pub status: Game2048Status,
}
