//! Grid Snake - a terminal arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake movement, growth, collisions, scoring)
//! - `states`: Screen state machine (start, playing, game over, leaderboard)
//! - `highscores`: Persistent top-10 leaderboard
//! - `settings`: Data-driven game tuning
//! - `renderer`: Narrow drawing interface plus the terminal implementation
//! - `platform`: Terminal key mapping and frame pacing

pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod states;

pub use highscores::{HighScoreEntry, Leaderboard};
pub use input::Key;
pub use settings::Settings;
pub use states::StateMachine;

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (cells)
    pub const GRID_COLS: i32 = 32;
    pub const GRID_ROWS: i32 = 32;

    /// Snake length at session start
    pub const START_LENGTH: usize = 3;

    /// Outer loop rate (input, advance, draw)
    pub const OUTER_FPS: u32 = 60;

    /// Snake moves per second at session start
    pub const INITIAL_SPEED: f32 = 10.0;
    /// Added to the speed every `SPEED_UP_EVERY` targets eaten
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Speed ceiling
    pub const MAX_SPEED: f32 = 25.0;
    pub const SPEED_UP_EVERY: u32 = 5;

    /// Score awarded per target eaten
    pub const POINTS_PER_TARGET: u32 = 10;

    /// Longest name the leaderboard keeps
    pub const MAX_NAME_LEN: usize = 12;

    /// Start prompt toggles visibility at this period (seconds)
    pub const PROMPT_BLINK_SECS: f32 = 0.5;
    /// Name entry cursor blink period (seconds)
    pub const CURSOR_BLINK_SECS: f32 = 1.0 / 3.0;
}

/// Whether a blink timer is in its "on" half at `elapsed` seconds
#[inline]
pub fn blink_on(elapsed: f32, period: f32) -> bool {
    if period <= 0.0 {
        return true;
    }
    ((elapsed / period) as u64) % 2 == 0
}
