use super::types::{Mark, TicTacToeStatus, TicTacToeView};

pub const CELL_COUNT: usize = 9;

/// The eight winning triads: three rows, three columns, two diagonals.
#[rustfmt::skip]
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

pub struct TicTacToeGameState {
    board: [Mark; CELL_COUNT],
    current_mark: Mark,
    status: TicTacToeStatus,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: [Mark::Empty; CELL_COUNT],
            current_mark: Mark::X,
            status: TicTacToeStatus::InProgress,
        }
    }

    /// Clears the board and hands the first move back to X.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Places the current player's mark. A finished game, an out-of-range
    /// index and an occupied cell are all rejected; callers treat the error
    /// as an ignorable input, not a failure.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != TicTacToeStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if index >= CELL_COUNT {
            return Err(format!("Cell index out of range: {}", index));
        }
        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = self.current_mark;
        self.check_game_over();

        if self.status == TicTacToeStatus::InProgress {
            self.current_mark = self
                .current_mark
                .opponent()
                .expect("Current mark is never empty");
        }
        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.winning_mark() {
            self.status = match winner {
                Mark::X => TicTacToeStatus::XWon,
                Mark::O => TicTacToeStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.iter().all(|&cell| cell != Mark::Empty) {
            self.status = TicTacToeStatus::Draw;
        }
    }

    fn winning_mark(&self) -> Option<Mark> {
        for line in WIN_LINES {
            let first = self.board[line[0]];
            if first != Mark::Empty && line.iter().all(|&i| self.board[i] == first) {
                return Some(first);
            }
        }
        None
    }

    pub fn status(&self) -> TicTacToeStatus {
        self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn to_view(&self) -> TicTacToeView {
        TicTacToeView {
            cells: self.board.to_vec(),
            current_mark: self.current_mark,
            status: self.status,
        }
    }

    #[cfg(test)]
    fn set_board(&mut self, board: [Mark; CELL_COUNT]) {
        self.board = board;
    }
}
