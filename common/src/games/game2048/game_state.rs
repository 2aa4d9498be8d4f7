use crate::games::grid::Grid;
use crate::games::session_rng::SessionRng;
use crate::games::types::Direction;

use super::settings::Game2048Settings;
use super::types::{Game2048Status, Game2048View};

pub struct Game2048State {
    grid: Grid<u32>,
    score: u32,
    status: Game2048Status,
    moves_made: u32,
}

impl Game2048State {
    pub fn new(settings: &Game2048Settings, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            grid: Grid::new(settings.field_width, settings.field_height, 0),
            score: 0,
            status: Game2048Status::InProgress,
            moves_made: 0,
        };
        state.spawn_tile(rng);
        state.spawn_tile(rng);
        state
    }

    /// Starts the game over on the same field: empty grid, two fresh tiles,
    /// zero score.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.grid = Grid::new(self.grid.width(), self.grid.height(), 0);
        self.score = 0;
        self.status = Game2048Status::InProgress;
        self.moves_made = 0;
        self.spawn_tile(rng);
        self.spawn_tile(rng);
    }

    /// Applies one directional move. Returns false, leaving the state fully
    /// untouched, when the shift would not change the grid; only a changed
    /// move scores, spawns a tile and can end the game.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut SessionRng) -> bool {
        if self.status != Game2048Status::InProgress {
            return false;
        }

        let (shifted, score_delta) = shift_grid(&self.grid, direction);
        if shifted == self.grid {
            return false;
        }

        self.grid = shifted;
        self.score += score_delta;
        self.moves_made += 1;
        self.spawn_tile(rng);

        if !self.has_valid_moves() {
            self.status = Game2048Status::GameOver;
        }

        true
    }

    /// Places a 2 (or, one time in ten, a 4) on a uniformly chosen empty
    /// cell. No-op on a full grid.
    fn spawn_tile(&mut self, rng: &mut SessionRng) {
        let mut empty_positions = Vec::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if self.grid.get(x, y) == 0 {
                    empty_positions.push((x, y));
                }
            }
        }

        if empty_positions.is_empty() {
            return;
        }

        let (x, y) = empty_positions[rng.random_range(0..empty_positions.len())];
        let value = if rng.random_ratio(1, 10) { 4 } else { 2 };
        self.grid.set(x, y, value);
    }

    fn has_valid_moves(&self) -> bool {
        if self.grid.cells().contains(&0) {
            return true;
        }

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let val = self.grid.get(x, y);
                if x + 1 < self.grid.width() && val == self.grid.get(x + 1, y) {
                    return true;
                }
                if y + 1 < self.grid.height() && val == self.grid.get(x, y + 1) {
                    return true;
                }
            }
        }

        false
    }

    pub fn status(&self) -> Game2048Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.cells().iter().copied().max().unwrap_or(0)
    }

    pub fn to_view(&self, best_score: u32) -> Game2048View {
        Game2048View {
            cells: self.grid.cells().to_vec(),
            width: self.grid.width(),
            height: self.grid.height(),
            score: self.score,
            best_score,
            moves_made: self.moves_made,
            status: self.status,
        }
    }

    #[cfg(test)]
    fn set_cells(&mut self, cells: Vec<u32>) {
        self.grid = Grid::from_vec(self.grid.width(), self.grid.height(), cells);
    }

    #[cfg(test)]
    fn cells(&self) -> &[u32] {
        self.grid.cells()
    }
}

/// Pure shift of the whole grid in one direction. Lines are extracted in the
/// direction's traversal order, compacted and merged, then written back in
/// the same orientation. Returns the shifted grid and the score gained.
pub fn shift_grid(grid: &Grid<u32>, direction: Direction) -> (Grid<u32>, u32) {
    let width = grid.width();
    let height = grid.height();
    let mut shifted = grid.clone();
    let mut score_delta: u32 = 0;

    match direction {
        Direction::Left => {
            for y in 0..height {
                let line: Vec<u32> = (0..width).map(|x| grid.get(x, y)).collect();
                let (merged, score) = slide_and_merge_line(&line);
                score_delta += score;
                for (x, &val) in merged.iter().enumerate() {
                    shifted.set(x, y, val);
                }
            }
        }
        Direction::Right => {
            for y in 0..height {
                let line: Vec<u32> = (0..width).rev().map(|x| grid.get(x, y)).collect();
                let (merged, score) = slide_and_merge_line(&line);
                score_delta += score;
                for (x, &val) in merged.iter().enumerate() {
                    shifted.set(width - 1 - x, y, val);
                }
            }
        }
        Direction::Up => {
            for x in 0..width {
                let line: Vec<u32> = (0..height).map(|y| grid.get(x, y)).collect();
                let (merged, score) = slide_and_merge_line(&line);
                score_delta += score;
                for (y, &val) in merged.iter().enumerate() {
                    shifted.set(x, y, val);
                }
            }
        }
        Direction::Down => {
            for x in 0..width {
                let line: Vec<u32> = (0..height).rev().map(|y| grid.get(x, y)).collect();
                let (merged, score) = slide_and_merge_line(&line);
                score_delta += score;
                for (y, &val) in merged.iter().enumerate() {
                    shifted.set(x, height - 1 - y, val);
                }
            }
        }
    }

    (shifted, score_delta)
}

/// Compacts a line towards its leading end and merges equal adjacent pairs
/// once each, scoring the merged value. A tile produced by a merge never
/// merges again within the same call.
fn slide_and_merge_line(line: &[u32]) -> (Vec<u32>, u32) {
    let mut result: Vec<u32> = Vec::with_capacity(line.len());
    let mut score: u32 = 0;

    let non_zero: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut i = 0;
    while i < non_zero.len() {
        if i + 1 < non_zero.len() && non_zero[i] == non_zero[i + 1] {
            let merged = non_zero[i] * 2;
            result.push(merged);
            score += merged;
            i += 2;
        } else {
            result.push(non_zero[i]);
            i += 1;
        }
    }

    while result.len() < line.len() {
        result.push(0);
    }

    (result, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(rng: &mut SessionRng) -> Game2048State {
        Game2048State::new(&Game2048Settings::default(), rng)
    }

    fn cell_sum(cells: &[u32]) -> u64 {
        cells.iter().map(|&v| v as u64).sum()
    }

    #[test]
    fn test_new_has_two_tiles() {
        let mut rng = SessionRng::new(42);
        let state = new_state(&mut rng);
        let non_zero = state.cells().iter().filter(|&&v| v != 0).count();
        assert_eq!(non_zero, 2);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Game2048Status::InProgress);
    }

    #[test]
    fn test_slide_and_merge_line_pairs_merge_independently() {
        let (result, score) = slide_and_merge_line(&[2, 2, 2, 2]);
        assert_eq!(result, vec![4, 4, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_slide_and_merge_line_triple_merges_leading_pair() {
        let (result, score) = slide_and_merge_line(&[2, 2, 2, 0]);
        assert_eq!(result, vec![4, 2, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_and_merge_line_merged_tile_does_not_remerge() {
        let (result, score) = slide_and_merge_line(&[4, 2, 2, 4]);
        assert_eq!(result, vec![4, 4, 4, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_and_merge_line_no_merge() {
        let (result, score) = slide_and_merge_line(&[2, 4, 8, 16]);
        assert_eq!(result, vec![2, 4, 8, 16]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_slide_and_merge_line_compacts_across_gaps() {
        let (result, score) = slide_and_merge_line(&[2, 0, 0, 2]);
        assert_eq!(result, vec![4, 0, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_left_merges_full_equal_row() {
        let mut grid = Grid::new(4, 4, 0u32);
        for x in 0..4 {
            grid.set(x, 0, 2);
        }
        let (shifted, score) = shift_grid(&grid, Direction::Left);
        assert_eq!(&shifted.cells()[0..4], &[4, 4, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_shift_right_merges_full_equal_row() {
        let mut grid = Grid::new(4, 4, 0u32);
        for x in 0..4 {
            grid.set(x, 0, 2);
        }
        let (shifted, score) = shift_grid(&grid, Direction::Right);
        assert_eq!(&shifted.cells()[0..4], &[0, 0, 4, 4]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_shift_down_slides_column() {
        let mut grid = Grid::new(4, 4, 0u32);
        grid.set(1, 0, 2);
        grid.set(1, 2, 2);
        let (shifted, score) = shift_grid(&grid, Direction::Down);
        assert_eq!(shifted.get(1, 3), 4);
        assert_eq!(shifted.get(1, 0), 0);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_conserves_cell_sum() {
        for seed in 0..200u64 {
            let mut rng = SessionRng::new(seed);
            let mut grid = Grid::new(4, 4, 0u32);
            for y in 0..4 {
                for x in 0..4 {
                    // Roughly half empty, the rest small powers of two.
                    if rng.random_ratio(1, 2) {
                        let exp: u32 = rng.random_range(1..6);
                        grid.set(x, y, 1 << exp);
                    }
                }
            }

            for direction in [
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down,
            ] {
                let (shifted, _) = shift_grid(&grid, direction);
                assert_eq!(
                    cell_sum(shifted.cells()),
                    cell_sum(grid.cells()),
                    "Seed {}: sum changed on {:?}",
                    seed,
                    direction
                );
            }
        }
    }

    #[test]
    fn test_apply_move_merges_and_scores() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        assert!(state.apply_move(Direction::Left, &mut rng));
        assert_eq!(state.cells()[0], 4);
        assert_eq!(state.score(), 4);
        assert_eq!(state.moves_made(), 1);
    }

    #[test]
    fn test_apply_move_spawns_exactly_one_tile() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        state.apply_move(Direction::Left, &mut rng);
        // Two tiles merged into one, one spawned.
        let non_zero = state.cells().iter().filter(|&&v| v != 0).count();
        assert_eq!(non_zero, 2);
    }

    #[test]
    fn test_spawned_tile_is_two_or_four() {
        for seed in 0..100u64 {
            let mut rng = SessionRng::new(seed);
            let mut state = new_state(&mut rng);
            state.set_cells(vec![
                2, 2, 0, 0,
                0, 0, 0, 0,
                0, 0, 0, 0,
                0, 0, 0, 0,
            ]);
            let sum_before = cell_sum(state.cells());
            state.apply_move(Direction::Left, &mut rng);
            let spawned = cell_sum(state.cells()) - sum_before;
            assert!(
                spawned == 2 || spawned == 4,
                "Seed {}: spawned value {}",
                seed,
                spawned
            );
        }
    }

    #[test]
    fn test_unchanged_move_returns_false_and_touches_nothing() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        assert!(!state.apply_move(Direction::Left, &mut rng));
        assert!(!state.apply_move(Direction::Up, &mut rng));
        let non_zero = state.cells().iter().filter(|&&v| v != 0).count();
        assert_eq!(non_zero, 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves_made(), 0);
    }

    #[test]
    fn test_repeat_move_idempotent_iff_unchanged() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2, 4, 8, 16,
            0, 0, 0,  0,
            0, 0, 0,  0,
            0, 0, 0,  0,
        ]);
        // The row is already compacted left; only spawn outcomes could
        // change it, and an unchanged shift must not spawn.
        let before: Vec<u32> = state.cells().to_vec();
        assert!(!state.apply_move(Direction::Left, &mut rng));
        assert_eq!(state.cells(), &before[..]);
    }

    #[test]
    fn test_game_over_when_no_moves_left() {
        let mut rng = SessionRng::new(42);
        let settings = Game2048Settings {
            field_width: 2,
            field_height: 2,
        };
        let mut state = Game2048State::new(&settings, &mut rng);
        state.set_cells(vec![
            4, 8,
            0, 16,
        ]);
        // The bottom row slides left, the spawn fills the freed cell. The
        // resulting board has no equal neighbors whether a 2 or a 4 lands.
        assert!(state.apply_move(Direction::Left, &mut rng));
        assert_eq!(state.status(), Game2048Status::GameOver);
        assert!(!state.apply_move(Direction::Left, &mut rng));
    }

    #[test]
    fn test_not_terminal_with_any_empty_cell() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2,  4,  2,  4,
            4,  2,  4,  2,
            2,  4,  2,  4,
            4,  2,  4,  0,
        ]);
        assert!(state.has_valid_moves());
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut rng = SessionRng::new(42);
        let mut state = new_state(&mut rng);
        state.set_cells(vec![
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        state.apply_move(Direction::Left, &mut rng);
        assert!(state.score() > 0);

        state.reset(&mut rng);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves_made(), 0);
        assert_eq!(state.status(), Game2048Status::InProgress);
        let non_zero = state.cells().iter().filter(|&&v| v != 0).count();
        assert_eq!(non_zero, 2);
    }

    #[test]
    fn test_view_reflects_state() {
        let mut rng = SessionRng::new(42);
        let state = new_state(&mut rng);
        let view = state.to_view(1234);
        assert_eq!(view.width, 4);
        assert_eq!(view.height, 4);
        assert_eq!(view.best_score, 1234);
        assert_eq!(view.cells, state.cells());
    }
}
