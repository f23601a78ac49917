//! Game over: optional name entry for a high score, then replay/leaderboard

use super::Transition;
use super::playing::draw_board;
use crate::consts::{CURSOR_BLINK_SECS, MAX_NAME_LEN};
use crate::highscores::Leaderboard;
use crate::input::Key;
use crate::renderer::{OverlayLine, RenderTarget, TextSize, Tone};
use crate::sim::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverPhase {
    /// Typing a name for the leaderboard
    NameEntry,
    /// Name committed, or the score did not qualify
    Done,
}

#[derive(Debug, Clone)]
pub struct GameOverState {
    /// Final board, drawn under the overlay
    session: Session,
    /// Decided once at construction and never revisited
    is_high: bool,
    phase: GameOverPhase,
    name: String,
    /// Seconds on this screen, drives the cursor blink
    elapsed: f32,
}

impl GameOverState {
    pub fn new(session: Session, leaderboard: &Leaderboard) -> Self {
        let is_high = leaderboard.is_high_score(session.score());
        let phase = if is_high {
            GameOverPhase::NameEntry
        } else {
            GameOverPhase::Done
        };
        Self {
            session,
            is_high,
            phase,
            name: String::new(),
            elapsed: 0.0,
        }
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn is_high_score(&self) -> bool {
        self.is_high
    }

    pub fn phase(&self) -> GameOverPhase {
        self.phase
    }

    /// Name typed so far
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Append typed characters (upper-cased), stopping at 12
    pub fn push_char(&mut self, c: char) {
        for upper in c.to_uppercase() {
            if self.name.chars().count() >= MAX_NAME_LEN {
                break;
            }
            self.name.push(upper);
        }
    }

    pub fn pop_char(&mut self) {
        self.name.pop();
    }

    /// Commit the typed name. A blank (or whitespace-only) name is refused
    /// and the phase is unchanged.
    pub fn submit(&mut self, leaderboard: &mut Leaderboard) -> bool {
        if self.phase != GameOverPhase::NameEntry || self.name.trim().is_empty() {
            return false;
        }
        let rank = leaderboard.add(&self.name, self.score());
        log::info!(
            "Recorded {} with {} (rank {rank:?})",
            self.name.trim(),
            self.score()
        );
        self.phase = GameOverPhase::Done;
        true
    }

    pub fn cursor_visible(&self) -> bool {
        crate::blink_on(self.elapsed, CURSOR_BLINK_SECS)
    }

    pub(super) fn handle_input(
        &mut self,
        key: Key,
        leaderboard: &mut Leaderboard,
    ) -> Option<Transition> {
        match self.phase {
            GameOverPhase::NameEntry => {
                match key {
                    Key::Backspace => self.pop_char(),
                    Key::Enter => {
                        self.submit(leaderboard);
                    }
                    _ => {
                        if let Some(c) = key.printable() {
                            self.push_char(c);
                        }
                    }
                }
                None
            }
            GameOverPhase::Done => {
                if key.is_confirm() {
                    Some(Transition::NewGame)
                } else if key.is_leaderboard() {
                    Some(Transition::ShowLeaderboard)
                } else {
                    None
                }
            }
        }
    }

    pub(super) fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn overlay_lines(&self) -> Vec<OverlayLine> {
        let mut lines = vec![
            OverlayLine::new("GAME OVER", TextSize::Large, Tone::Alert),
            OverlayLine::new(format!("SCORE  {}", self.score()), TextSize::Medium, Tone::Text),
        ];
        if self.is_high {
            lines.push(OverlayLine::new("NEW HIGH SCORE!", TextSize::Medium, Tone::Accent));
        }
        match self.phase {
            GameOverPhase::NameEntry => {
                let cursor = if self.cursor_visible() { '_' } else { ' ' };
                lines.push(OverlayLine::new("ENTER YOUR NAME:", TextSize::Small, Tone::Text));
                lines.push(OverlayLine::new(
                    format!("{}{cursor}", self.name),
                    TextSize::Medium,
                    Tone::Bright,
                ));
                lines.push(OverlayLine::new("ENTER to confirm", TextSize::Small, Tone::Dim));
            }
            GameOverPhase::Done => {
                lines.push(OverlayLine::new("SPACE - PLAY AGAIN", TextSize::Small, Tone::Text));
                lines.push(OverlayLine::new("L     - LEADERBOARD", TextSize::Small, Tone::Dim));
            }
        }
        lines
    }

    pub(super) fn render(&self, target: &mut impl RenderTarget) {
        draw_board(&self.session, target);
        target.draw_overlay(&self.overlay_lines());
    }
}
