#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// Player input accepted by a tic-tac-toe session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Cell index 0..=8, row-major.
    PlaceMark(usize),
    NewGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct TicTacToeView {
    pub cells: Vec<Mark>,
    pub current_mark: Mark,
    pub status: TicTacToeStatus,
}
