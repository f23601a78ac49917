//! Title screen

use super::Transition;
use crate::consts::PROMPT_BLINK_SECS;
use crate::input::Key;
use crate::renderer::{OverlayLine, RenderTarget, TextSize, Tone};
use crate::settings::Settings;

#[derive(Debug, Clone, Default)]
pub struct StartState {
    /// Seconds on this screen, drives the prompt blink
    elapsed: f32,
}

impl StartState {
    pub(super) fn handle_input(&mut self, key: Key) -> Option<Transition> {
        if key.is_confirm() {
            Some(Transition::NewGame)
        } else if key.is_leaderboard() {
            Some(Transition::ShowLeaderboard)
        } else {
            None
        }
    }

    pub(super) fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn prompt_visible(&self) -> bool {
        crate::blink_on(self.elapsed, PROMPT_BLINK_SECS)
    }

    pub(super) fn render(&self, settings: &Settings, target: &mut impl RenderTarget) {
        target.draw_background(settings.grid_cols, settings.grid_rows);
        let prompt_tone = if self.prompt_visible() {
            Tone::Accent
        } else {
            Tone::Dim
        };
        target.draw_overlay(&[
            OverlayLine::new("SNAKE", TextSize::Huge, Tone::Accent),
            OverlayLine::new("PRESS SPACE TO PLAY", TextSize::Medium, prompt_tone),
            OverlayLine::new("L  -  LEADERBOARD", TextSize::Small, Tone::Dim),
        ]);
    }
}
