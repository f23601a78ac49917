//! Leaderboard screen, reachable from the title and from game over

use super::Transition;
use super::game_over::GameOverState;
use crate::highscores::{HighScoreEntry, Leaderboard, MAX_HIGH_SCORES};
use crate::input::Key;
use crate::renderer::{OverlayLine, RenderTarget, TextSize, Tone};
use crate::settings::Settings;

/// Screen to restore when the leaderboard is dismissed
#[derive(Debug, Clone)]
pub enum ReturnTo {
    Start,
    /// Back to the same finished game, past name entry
    GameOver(Box<GameOverState>),
}

#[derive(Debug, Clone)]
pub struct LeaderboardState {
    /// Snapshot taken on entry
    entries: Vec<HighScoreEntry>,
    return_to: ReturnTo,
}

impl LeaderboardState {
    pub fn new(leaderboard: &Leaderboard, return_to: ReturnTo) -> Self {
        Self {
            entries: leaderboard.top(MAX_HIGH_SCORES).to_vec(),
            return_to,
        }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn return_to(&self) -> &ReturnTo {
        &self.return_to
    }

    pub(super) fn into_return_to(self) -> ReturnTo {
        self.return_to
    }

    pub(super) fn handle_input(&mut self, key: Key) -> Option<Transition> {
        if key.is_confirm() || key.is_cancel() {
            Some(Transition::Back)
        } else {
            None
        }
    }

    pub fn overlay_lines(&self) -> Vec<OverlayLine> {
        let mut lines = vec![OverlayLine::new("TOP  SCORES", TextSize::Large, Tone::Accent)];
        if self.entries.is_empty() {
            lines.push(OverlayLine::new(
                "No scores yet. Play a game!",
                TextSize::Small,
                Tone::Dim,
            ));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            let tone = if i == 0 { Tone::Accent } else { Tone::Text };
            lines.push(OverlayLine::new(
                format_entry(i + 1, entry),
                TextSize::Small,
                tone,
            ));
        }
        lines.push(OverlayLine::blank());
        lines.push(OverlayLine::new("SPACE  -  BACK", TextSize::Small, Tone::Dim));
        lines
    }

    pub(super) fn render(&self, settings: &Settings, target: &mut impl RenderTarget) {
        target.draw_background(settings.grid_cols, settings.grid_rows);
        target.draw_overlay(&self.overlay_lines());
    }
}

/// One ranked row, e.g. ` 1. BOB               45  2024-03-01`
pub fn format_entry(rank: usize, entry: &HighScoreEntry) -> String {
    format!(
        "{rank:>2}. {:<12}  {:>6}  {}",
        entry.name,
        entry.score,
        entry.date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_format_entry() {
        let entry = HighScoreEntry {
            name: "BOB".to_string(),
            score: 45,
            date: day(),
        };
        assert_eq!(format_entry(1, &entry), " 1. BOB               45  2024-03-01");
        assert_eq!(&format_entry(10, &entry)[..4], "10. ");
    }

    #[test]
    fn test_empty_board_message() {
        let state = LeaderboardState::new(&Leaderboard::in_memory(), ReturnTo::Start);
        let texts: Vec<String> = state.overlay_lines().into_iter().map(|l| l.text).collect();
        assert_eq!(
            texts,
            vec![
                "TOP  SCORES".to_string(),
                "No scores yet. Play a game!".to_string(),
                String::new(),
                "SPACE  -  BACK".to_string(),
            ]
        );
    }

    #[test]
    fn test_rank_one_highlighted() {
        let mut lb = Leaderboard::in_memory();
        lb.add_dated("ANN", 50, day());
        lb.add_dated("BOB", 45, day());
        let state = LeaderboardState::new(&lb, ReturnTo::Start);
        let lines = state.overlay_lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].text.contains("ANN"));
        assert_eq!(lines[1].tone, Tone::Accent);
        assert!(lines[2].text.contains("BOB"));
        assert_eq!(lines[2].tone, Tone::Text);
    }

    #[test]
    fn test_snapshot_ignores_later_changes() {
        let mut lb = Leaderboard::in_memory();
        lb.add_dated("ANN", 50, day());
        let state = LeaderboardState::new(&lb, ReturnTo::Start);
        lb.add_dated("BOB", 60, day());
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn test_back_keys() {
        let mut state = LeaderboardState::new(&Leaderboard::in_memory(), ReturnTo::Start);
        assert_eq!(state.handle_input(Key::Space), Some(Transition::Back));
        assert_eq!(state.handle_input(Key::Enter), Some(Transition::Back));
        assert_eq!(state.handle_input(Key::Escape), Some(Transition::Back));
        assert_eq!(state.handle_input(Key::Char('l')), None);
        assert!(matches!(state.return_to(), ReturnTo::Start));
    }
}
