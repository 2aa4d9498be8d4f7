#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TetrisStatus {
    InProgress,
    GameOver,
}

/// Player input accepted by a tetris session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TetrisCommand {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Resume,
    NewGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct TetrisView {
    /// Board cells with the falling piece already composited in.
    pub cells: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Spawn matrix of the upcoming piece, for the preview box.
    pub next_piece: Vec<Vec<u8>>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub status: TetrisStatus,
}
