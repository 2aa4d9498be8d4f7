use crate::games::types::{Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeStatus {
    InProgress,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Player input accepted by a snake session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    ChangeDirection(Direction),
    NewGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct SnakeView {
    /// Segments head first.
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub width: usize,
    pub height: usize,
    pub score: u32,
    pub high_score: u32,
    pub status: SnakeStatus,
}
