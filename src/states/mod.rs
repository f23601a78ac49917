//! Screen state machine
//!
//! Exactly one screen is active at a time. Each screen turns keys and
//! elapsed time into an optional [`Transition`]; [`StateMachine`] owns the
//! leaderboard and settings shared across screens and performs the swap.

pub mod game_over;
pub mod leaderboard;
pub mod playing;
pub mod start;

pub use game_over::{GameOverPhase, GameOverState};
pub use leaderboard::{LeaderboardState, ReturnTo};
pub use playing::PlayingState;
pub use start::StartState;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::Leaderboard;
use crate::input::Key;
use crate::renderer::RenderTarget;
use crate::settings::Settings;
use crate::sim::Session;

/// The active screen and its private data
#[derive(Debug, Clone)]
pub enum Screen {
    Start(StartState),
    Playing(PlayingState),
    GameOver(GameOverState),
    Leaderboard(LeaderboardState),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Start(_) => "start",
            Screen::Playing(_) => "playing",
            Screen::GameOver(_) => "game over",
            Screen::Leaderboard(_) => "leaderboard",
        }
    }
}

/// Screen change requested by the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fresh session
    NewGame,
    /// Abandon to the title
    ToStart,
    /// The running session ended
    GameOver,
    ShowLeaderboard,
    /// Leave the leaderboard for its return target
    Back,
}

pub struct StateMachine {
    screen: Screen,
    leaderboard: Leaderboard,
    settings: Settings,
    /// Seeds each new session
    seeds: Pcg32,
}

impl StateMachine {
    /// Start on the title screen
    pub fn new(settings: Settings, leaderboard: Leaderboard, seed: u64) -> Self {
        Self {
            screen: Screen::Start(StartState::default()),
            leaderboard,
            settings,
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch straight to play with a prepared session (replays, scenarios)
    pub fn start_session(&mut self, session: Session) {
        log::debug!("Starting prepared session from the {} screen", self.screen.name());
        self.screen = Screen::Playing(PlayingState::new(session));
    }

    /// Route a key to the active screen
    pub fn handle_input(&mut self, key: Key) {
        let transition = match &mut self.screen {
            Screen::Start(s) => s.handle_input(key),
            Screen::Playing(p) => p.handle_input(key),
            Screen::GameOver(g) => g.handle_input(key, &mut self.leaderboard),
            Screen::Leaderboard(l) => l.handle_input(key),
        };
        if let Some(t) = transition {
            self.apply(t);
        }
    }

    /// Advance the active screen by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let transition = match &mut self.screen {
            Screen::Start(s) => {
                s.advance(dt);
                None
            }
            Screen::Playing(p) => p.advance(dt),
            Screen::GameOver(g) => {
                g.advance(dt);
                None
            }
            Screen::Leaderboard(_) => None,
        };
        if let Some(t) = transition {
            self.apply(t);
        }
    }

    pub fn render(&self, target: &mut impl RenderTarget) {
        match &self.screen {
            Screen::Start(s) => s.render(&self.settings, target),
            Screen::Playing(p) => p.render(target),
            Screen::GameOver(g) => g.render(target),
            Screen::Leaderboard(l) => l.render(&self.settings, target),
        }
    }

    fn apply(&mut self, transition: Transition) {
        let previous = std::mem::replace(&mut self.screen, Screen::Start(StartState::default()));
        let from = previous.name();

        self.screen = match (transition, previous) {
            (Transition::NewGame, _) => {
                let seed = self.seeds.next_u64();
                Screen::Playing(PlayingState::new(Session::new(&self.settings, seed)))
            }
            (Transition::ToStart, _) => Screen::Start(StartState::default()),
            (Transition::GameOver, Screen::Playing(p)) => {
                Screen::GameOver(GameOverState::new(p.into_session(), &self.leaderboard))
            }
            (Transition::ShowLeaderboard, Screen::GameOver(g)) => Screen::Leaderboard(
                LeaderboardState::new(&self.leaderboard, ReturnTo::GameOver(Box::new(g))),
            ),
            (Transition::ShowLeaderboard, _) => {
                Screen::Leaderboard(LeaderboardState::new(&self.leaderboard, ReturnTo::Start))
            }
            (Transition::Back, Screen::Leaderboard(l)) => match l.into_return_to() {
                ReturnTo::Start => Screen::Start(StartState::default()),
                ReturnTo::GameOver(g) => Screen::GameOver(*g),
            },
            (t, previous) => {
                log::warn!("Ignoring {t:?} on the {} screen", previous.name());
                previous
            }
        };

        log::debug!("{transition:?}: {from} -> {}", self.screen.name());
    }
}
