//! Active gameplay: steers the snake and paces simulation ticks

use super::Transition;
use crate::input::Key;
use crate::renderer::RenderTarget;
use crate::sim::{Session, TickOutcome};

#[derive(Debug, Clone)]
pub struct PlayingState {
    session: Session,
    /// Seconds since the last simulation tick
    accumulator: f32,
}

impl PlayingState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            accumulator: 0.0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) fn into_session(self) -> Session {
        self.session
    }

    pub(super) fn handle_input(&mut self, key: Key) -> Option<Transition> {
        if key.is_cancel() {
            return Some(Transition::ToStart);
        }
        if let Some(dir) = key.direction() {
            self.session.change_direction(dir);
        }
        None
    }

    /// Accumulate frame time; run one tick once a full tick interval has
    /// built up at the current speed, then reset the accumulator.
    pub(super) fn advance(&mut self, dt: f32) -> Option<Transition> {
        self.accumulator += dt;
        if self.accumulator < self.session.tick_interval() {
            return None;
        }
        self.accumulator = 0.0;

        match self.session.update() {
            TickOutcome::Died(_) | TickOutcome::Dead => Some(Transition::GameOver),
            TickOutcome::Moved | TickOutcome::Ate => None,
        }
    }

    pub(super) fn render(&self, target: &mut impl RenderTarget) {
        draw_board(&self.session, target);
    }
}

/// Board, target, snake and HUD for a session
pub(super) fn draw_board(session: &Session, target: &mut impl RenderTarget) {
    let rules = session.rules();
    target.draw_background(rules.cols, rules.rows);
    target.draw_target(session.target());
    target.draw_snake(session.snake());
    target.draw_hud(session.score(), session.speed());
}
