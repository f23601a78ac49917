//! Platform abstraction layer
//!
//! Handles terminal-specific concerns the core never sees:
//! - Key events (crossterm → `input::Key`)
//! - Frame pacing for the outer loop

pub mod keys;
pub mod pacer;

pub use keys::{map_key_event, should_quit};
pub use pacer::FramePacer;
