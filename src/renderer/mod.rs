//! Rendering module
//!
//! The game only talks to a [`RenderTarget`]: a handful of draw calls for the
//! board, the snake, the target, the HUD and a centered text overlay used by
//! every menu-like screen. `view` implements it on a character framebuffer and
//! `terminal` flushes that framebuffer to a real terminal.

pub mod fb;
pub mod terminal;
pub mod view;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use terminal::TerminalRenderer;
pub use view::TermView;

use crate::sim::{Cell, Snake};

/// Relative emphasis of an overlay line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Huge,
    Large,
    Medium,
    Small,
}

/// Color role of an overlay line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Highlight (title, rank 1, blinking prompt "on")
    Accent,
    /// Regular HUD text
    Text,
    /// Hints, blinking prompt "off"
    Dim,
    /// Typed name
    Bright,
    /// Game over banner
    Alert,
}

/// One line of a centered overlay panel
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub size: TextSize,
    pub tone: Tone,
}

impl OverlayLine {
    pub fn new(text: impl Into<String>, size: TextSize, tone: Tone) -> Self {
        Self {
            text: text.into(),
            size,
            tone,
        }
    }

    /// Empty spacer line
    pub fn blank() -> Self {
        Self::new("", TextSize::Small, Tone::Dim)
    }
}

/// Drawing surface the screens render into
pub trait RenderTarget {
    /// Clear and draw the empty `cols` x `rows` board
    fn draw_background(&mut self, cols: i32, rows: i32);
    fn draw_snake(&mut self, snake: &Snake);
    fn draw_target(&mut self, cell: Cell);
    /// Score and speed (moves per second)
    fn draw_hud(&mut self, score: u32, speed: f32);
    fn draw_overlay(&mut self, lines: &[OverlayLine]);
}
