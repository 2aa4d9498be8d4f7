use std::time::Duration;

use crate::games::grid::Grid;
use crate::games::session_rng::SessionRng;

use super::piece::Piece;
use super::settings::TetrisSettings;
use super::types::{TetrisStatus, TetrisView};

pub const POINTS_PER_LINE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;
const BASE_TICK_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TetrisTickOutcome {
    /// The piece dropped one row without locking.
    Moved,
    Locked {
        lines_cleared: u32,
    },
    /// The piece locked and the fresh spawn collided immediately.
    GameOver,
    /// The game was paused or already over.
    Ignored,
}

pub struct TetrisGameState {
    board: Grid<u8>,
    current: Piece,
    next: Piece,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    status: TetrisStatus,
}

impl TetrisGameState {
    pub fn new(settings: &TetrisSettings, rng: &mut SessionRng) -> Self {
        let board = Grid::new(settings.field_width, settings.field_height, 0);
        let current = Piece::random(rng, settings.field_width);
        let next = Piece::random(rng, settings.field_width);
        Self {
            board,
            current,
            next,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            status: TetrisStatus::InProgress,
        }
    }

    /// Starts the game over: empty board, fresh current and next pieces,
    /// zero score, level one, unpaused.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board = Grid::new(self.board.width(), self.board.height(), 0);
        self.current = Piece::random(rng, self.board.width());
        self.next = Piece::random(rng, self.board.width());
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.paused = false;
        self.status = TetrisStatus::InProgress;
    }

    /// A placement collides when any occupied cell leaves the side or
    /// bottom bounds or overlaps a filled board cell. Rows above the board
    /// never collide, so pieces may hang partially off the top.
    fn collides(&self, piece: &Piece) -> bool {
        for (x, y, _) in piece.occupied_cells() {
            if x < 0 || x >= self.board.width() as i32 || y >= self.board.height() as i32 {
                return true;
            }
            if y >= 0 && self.board.get(x as usize, y as usize) != 0 {
                return true;
            }
        }
        false
    }

    fn accepts_input(&self) -> bool {
        self.status == TetrisStatus::InProgress && !self.paused
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let mut shifted = self.current.clone();
        shifted.x += dx;
        if self.collides(&shifted) {
            return false;
        }
        self.current = shifted;
        true
    }

    /// Rotates the falling piece clockwise, reverting wholesale when the
    /// rotation would collide. No wall kicks.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let mut rotated = self.current.clone();
        rotated.matrix = self.current.rotated_matrix();
        if self.collides(&rotated) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// One gravity step: the piece moves down a row, or locks where it
    /// stands when the row below is blocked.
    pub fn gravity_tick(&mut self, rng: &mut SessionRng) -> TetrisTickOutcome {
        if !self.accepts_input() {
            return TetrisTickOutcome::Ignored;
        }
        self.current.y += 1;
        if !self.collides(&self.current) {
            return TetrisTickOutcome::Moved;
        }
        self.current.y -= 1;
        self.lock_current(rng)
    }

    /// Drops the piece straight to the floor and runs the full lock flow,
    /// including the fresh-spawn game-over check.
    pub fn hard_drop(&mut self, rng: &mut SessionRng) -> TetrisTickOutcome {
        if !self.accepts_input() {
            return TetrisTickOutcome::Ignored;
        }
        loop {
            self.current.y += 1;
            if self.collides(&self.current) {
                self.current.y -= 1;
                break;
            }
        }
        self.lock_current(rng)
    }

    fn lock_current(&mut self, rng: &mut SessionRng) -> TetrisTickOutcome {
        for (x, y, value) in self.current.occupied_cells() {
            // Cells still above the board are lost, matching the collision
            // rule that never considers them.
            if y >= 0 {
                self.board.set(x as usize, y as usize, value);
            }
        }

        let lines_cleared = self.clear_lines();
        if lines_cleared > 0 {
            self.lines += lines_cleared;
            // Scored with the level the lines were cleared at, before the
            // level advances.
            self.score += lines_cleared * POINTS_PER_LINE * self.level;
            self.level = self.lines / LINES_PER_LEVEL + 1;
        }

        self.current = self.next.clone();
        self.next = Piece::random(rng, self.board.width());

        if self.collides(&self.current) {
            self.status = TetrisStatus::GameOver;
            return TetrisTickOutcome::GameOver;
        }
        TetrisTickOutcome::Locked { lines_cleared }
    }

    /// Removes every fully occupied row, shifting the rows above it down
    /// and leaving an empty row at the top. Returns how many were removed.
    fn clear_lines(&mut self) -> u32 {
        let width = self.board.width();
        let mut cleared = 0;

        for y in 0..self.board.height() {
            if (0..width).all(|x| self.board.get(x, y) != 0) {
                for yy in (1..=y).rev() {
                    for x in 0..width {
                        let above = self.board.get(x, yy - 1);
                        self.board.set(x, yy, above);
                    }
                }
                for x in 0..width {
                    self.board.set(x, 0, 0);
                }
                cleared += 1;
            }
        }

        cleared
    }

    /// Pauses or resumes. Returns whether the flag actually flipped;
    /// redundant requests and anything after game over change nothing.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.status != TetrisStatus::InProgress || self.paused == paused {
            return false;
        }
        self.paused = paused;
        true
    }

    pub fn gravity_period(&self) -> Duration {
        Duration::from_millis(BASE_TICK_MS / self.level as u64)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> TetrisStatus {
        self.status
    }

    pub fn to_view(&self) -> TetrisView {
        let mut cells = self.board.cells().to_vec();
        if self.status == TetrisStatus::InProgress {
            for (x, y, value) in self.current.occupied_cells() {
                if y >= 0 {
                    cells[y as usize * self.board.width() + x as usize] = value;
                }
            }
        }
        TetrisView {
            cells,
            width: self.board.width(),
            height: self.board.height(),
            next_piece: self.next.matrix.clone(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            paused: self.paused,
            status: self.status,
        }
    }

    #[cfg(test)]
    fn set_board_row(&mut self, y: usize, values: &[u8]) {
        for (x, &value) in values.iter().enumerate() {
            self.board.set(x, y, value);
        }
    }

    #[cfg(test)]
    fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    #[cfg(test)]
    fn set_progress(&mut self, lines: u32) {
        self.lines = lines;
        self.level = lines / LINES_PER_LEVEL + 1;
    }

    #[cfg(test)]
    fn board_cells(&self) -> &[u8] {
        self.board.cells()
    }

    #[cfg(test)]
    fn current(&self) -> &Piece {
        &self.current
    }
}
