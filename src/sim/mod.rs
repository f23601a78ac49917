//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per `Session::update`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod session;
pub mod snake;
pub mod target;

pub use grid::{Cell, Direction, all_cells, in_bounds};
pub use session::{DeathCause, Session, SessionRules, TickOutcome};
pub use snake::Snake;
pub use target::{FALLBACK_CELL, spawn_target};
