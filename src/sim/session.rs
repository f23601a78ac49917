//! One play session: the snake, its target, score and the speed ramp
//!
//! Each `update` is exactly one discrete tick. Callers decide when a tick is
//! due (see `states::PlayingState`).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction};
use super::snake::Snake;
use super::target::spawn_target;
use crate::consts::START_LENGTH;
use crate::settings::Settings;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfCollision,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved without eating
    Moved,
    /// Ate the target and grew
    Ate,
    /// Collided this tick
    Died(DeathCause),
    /// Session was already over; nothing happened
    Dead,
}

/// Scoring and speed policy, copied out of `Settings` at session start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRules {
    pub cols: i32,
    pub rows: i32,
    pub points_per_target: u32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub max_speed: f32,
    pub speed_up_every: u32,
}

impl From<&Settings> for SessionRules {
    fn from(s: &Settings) -> Self {
        Self {
            cols: s.grid_cols,
            rows: s.grid_rows,
            points_per_target: s.points_per_target,
            initial_speed: s.initial_speed,
            speed_increment: s.speed_increment,
            max_speed: s.max_speed,
            speed_up_every: s.speed_up_every.max(1),
        }
    }
}

/// A live (or finished) game
#[derive(Debug, Clone)]
pub struct Session {
    rules: SessionRules,
    rng: Pcg32,
    snake: Snake,
    target: Cell,
    score: u32,
    consumed: u32,
    /// Ticks per second
    speed: f32,
    alive: bool,
}

impl Session {
    /// Start a session with the standard snake and a seeded target
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let rules = SessionRules::from(settings);
        let snake = Snake::starting(rules.cols, rules.rows, START_LENGTH);
        Self::with_snake(rules, snake, seed)
    }

    /// Start a session from an arbitrary snake (scenarios, tests)
    pub fn with_snake(rules: SessionRules, snake: Snake, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = spawn_target(&mut rng, snake.body().iter().copied(), rules.cols, rules.rows);
        log::info!("Session started (seed {seed}, target at {target})");
        Self {
            rules,
            rng,
            snake,
            target,
            score: 0,
            consumed: 0,
            speed: rules.initial_speed,
            alive: true,
        }
    }

    /// Advance one tick: move, check walls, check self, then eat.
    ///
    /// Collision short-circuits: a dying tick changes nothing else.
    pub fn update(&mut self) -> TickOutcome {
        if !self.alive {
            return TickOutcome::Dead;
        }

        self.snake.step();

        let cause = if self.snake.is_wall_collision(self.rules.cols, self.rules.rows) {
            Some(DeathCause::Wall)
        } else if self.snake.is_self_collision() {
            Some(DeathCause::SelfCollision)
        } else {
            None
        };
        if let Some(cause) = cause {
            self.alive = false;
            log::info!(
                "Session over: {cause:?} at {} (score {}, length {})",
                self.snake.head(),
                self.score,
                self.snake.len()
            );
            return TickOutcome::Died(cause);
        }

        if self.snake.head() != self.target {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.target = spawn_target(
            &mut self.rng,
            self.snake.body().iter().copied(),
            self.rules.cols,
            self.rules.rows,
        );
        self.score += self.rules.points_per_target;
        self.consumed += 1;
        if self.consumed % self.rules.speed_up_every == 0 {
            let before = self.speed;
            self.speed = (self.speed + self.rules.speed_increment).min(self.rules.max_speed);
            if self.speed != before {
                log::debug!("Speed up: {before} -> {}", self.speed);
            }
        }
        TickOutcome::Ate
    }

    /// Buffer a turn for the next tick
    pub fn change_direction(&mut self, dir: Direction) {
        if self.alive {
            self.snake.change_direction(dir);
        }
    }

    /// Seconds between ticks at the current speed
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.speed
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn consumed(&self) -> u32 {
        self.consumed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    /// Move the target (scenarios, tests). Ignored if `cell` is on the snake.
    pub fn place_target(&mut self, cell: Cell) {
        if !self.snake.occupies(cell) {
            self.target = cell;
        }
    }
}
