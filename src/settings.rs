//! Game settings and tuning
//!
//! Read once at startup from `snake_settings.json` in the working directory.
//! Any field left out of the file keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence;

/// Default settings file name
pub const SETTINGS_FILE: &str = "snake_settings.json";

/// Default leaderboard file name
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Smallest grid that still fits the starting snake with room to turn
const MIN_GRID: i32 = 4;

/// Largest grid side; wider boards do not fit a terminal
const MAX_GRID: i32 = 128;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    pub grid_cols: i32,
    pub grid_rows: i32,

    // === Speed ramp ===
    /// Snake moves per second at session start
    pub initial_speed: f32,
    /// Added every `speed_up_every` targets eaten
    pub speed_increment: f32,
    /// Ceiling for the speed ramp
    pub max_speed: f32,
    pub speed_up_every: u32,

    // === Scoring ===
    pub points_per_target: u32,

    // === Loop ===
    /// Outer loop frequency (input, advance, draw)
    pub outer_fps: u32,

    // === Storage ===
    pub leaderboard_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_cols: GRID_COLS,
            grid_rows: GRID_ROWS,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: MAX_SPEED,
            speed_up_every: SPEED_UP_EVERY,

            points_per_target: POINTS_PER_TARGET,

            outer_fps: OUTER_FPS,

            leaderboard_file: PathBuf::from(LEADERBOARD_FILE),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if missing or corrupt
    pub fn load(path: &Path) -> Self {
        match persistence::read_json::<Settings>(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {e}");
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.grid_cols < MIN_GRID || self.grid_rows < MIN_GRID {
            log::warn!(
                "Grid {}x{} too small, using {MIN_GRID} minimum",
                self.grid_cols,
                self.grid_rows
            );
            self.grid_cols = self.grid_cols.max(MIN_GRID);
            self.grid_rows = self.grid_rows.max(MIN_GRID);
        }
        if self.grid_cols > MAX_GRID || self.grid_rows > MAX_GRID {
            log::warn!(
                "Grid {}x{} too large, using {MAX_GRID} maximum",
                self.grid_cols,
                self.grid_rows
            );
            self.grid_cols = self.grid_cols.min(MAX_GRID);
            self.grid_rows = self.grid_rows.min(MAX_GRID);
        }
        if !(self.initial_speed.is_finite() && self.initial_speed > 0.0) {
            log::warn!("Invalid initial_speed {}, using default", self.initial_speed);
            self.initial_speed = defaults.initial_speed;
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            log::warn!("Invalid speed_increment {}, using 0", self.speed_increment);
            self.speed_increment = 0.0;
        }
        if !(self.max_speed.is_finite() && self.max_speed >= self.initial_speed) {
            log::warn!(
                "max_speed {} below initial_speed {}, clamping",
                self.max_speed,
                self.initial_speed
            );
            self.max_speed = self.initial_speed;
        }
        if self.speed_up_every == 0 {
            log::warn!("speed_up_every must be positive, using default");
            self.speed_up_every = defaults.speed_up_every;
        }
        if self.outer_fps == 0 {
            log::warn!("outer_fps must be positive, using default");
            self.outer_fps = defaults.outer_fps;
        }
        self
    }

    /// Total cells on the grid
    pub fn cell_count(&self) -> usize {
        (self.grid_cols.max(0) as usize) * (self.grid_rows.max(0) as usize)
    }
}
