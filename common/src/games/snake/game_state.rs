use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use crate::games::session_rng::SessionRng;
use crate::games::types::{Direction, Point};

use super::settings::SnakeSettings;
use super::types::{DeathReason, SnakeStatus, SnakeView};

pub const POINTS_PER_FOOD: u32 = 10;

const START_POSITION: Point = Point { x: 5, y: 5 };
const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeTickOutcome {
    Moved,
    Ate,
    Died(DeathReason),
    /// The game was already over when the tick arrived.
    Ignored,
}

pub struct SnakeGameState {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Point>,
    score: u32,
    tick_ms: u64,
    death_reason: Option<DeathReason>,
    settings: SnakeSettings,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let mut state = Self {
            body: VecDeque::new(),
            body_set: HashSet::new(),
            direction: START_DIRECTION,
            pending_direction: None,
            food: None,
            score: 0,
            tick_ms: settings.initial_tick_ms,
            death_reason: None,
            settings: settings.clone(),
        };
        state.reset(rng);
        state
    }

    /// Starts the game over: one segment at the start position heading
    /// right, fresh food, zero score, initial speed. The queued direction
    /// is dropped too, so a stale turn never leaks into the next game.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.body.clear();
        self.body_set.clear();
        self.body.push_back(START_POSITION);
        self.body_set.insert(START_POSITION);
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.tick_ms = self.settings.initial_tick_ms;
        self.death_reason = None;
        self.spawn_food(rng);
    }

    /// Queues a turn for the next tick. The opposite of the current heading
    /// and anything after death are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.death_reason.is_some() {
            return;
        }
        if direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances the snake one cell. Leaving the field or biting the body is
    /// death; the tail cell is exempt because it is vacated this tick.
    pub fn tick(&mut self, rng: &mut SessionRng) -> SnakeTickOutcome {
        if self.death_reason.is_some() {
            return SnakeTickOutcome::Ignored;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => {
                self.death_reason = Some(reason);
                return SnakeTickOutcome::Died(reason);
            }
        };

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if self.food == Some(next_head) {
            self.score += POINTS_PER_FOOD;
            self.spawn_food(rng);
            self.increase_speed();
            SnakeTickOutcome::Ate
        } else {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
            SnakeTickOutcome::Moved
        }
    }

    fn next_head_position(&self) -> Result<Point, DeathReason> {
        let head = *self.body.front().expect("Snake body should never be empty");

        let next_head = match self.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.settings.field_height - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.settings.field_width - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        if self.body_set.contains(&next_head) && Some(&next_head) != self.body.back() {
            return Err(DeathReason::SelfCollision);
        }

        Ok(next_head)
    }

    /// Places food on a uniformly chosen cell the body does not cover.
    /// No-op once the snake fills the whole field.
    fn spawn_food(&mut self, rng: &mut SessionRng) {
        let mut free_cells = Vec::new();
        for y in 0..self.settings.field_height {
            for x in 0..self.settings.field_width {
                let point = Point::new(x, y);
                if !self.body_set.contains(&point) {
                    free_cells.push(point);
                }
            }
        }

        if free_cells.is_empty() {
            self.food = None;
            return;
        }

        self.food = Some(free_cells[rng.random_range(0..free_cells.len())]);
    }

    fn increase_speed(&mut self) {
        if self.tick_ms > self.settings.min_tick_ms {
            self.tick_ms = self
                .tick_ms
                .saturating_sub(self.settings.speed_step_ms)
                .max(self.settings.min_tick_ms);
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SnakeStatus {
        if self.death_reason.is_some() {
            SnakeStatus::GameOver
        } else {
            SnakeStatus::InProgress
        }
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn to_view(&self, high_score: u32) -> SnakeView {
        SnakeView {
            body: self.body.iter().copied().collect(),
            food: self.food,
            width: self.settings.field_width,
            height: self.settings.field_height,
            score: self.score,
            high_score,
            status: self.status(),
        }
    }

    #[cfg(test)]
    fn set_body(&mut self, segments: &[Point], direction: Direction) {
        self.body = segments.iter().copied().collect();
        self.body_set = segments.iter().copied().collect();
        self.direction = direction;
        self.pending_direction = None;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }

    #[cfg(test)]
    fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    #[cfg(test)]
    fn food(&self) -> Option<Point> {
        self.food
    }
}
