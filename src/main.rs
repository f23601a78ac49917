//! Grid Snake - terminal entry point
//!
//! Logs go to `snake.log` because the terminal is taken over by the game.
//! Control with `RUST_LOG` as usual.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use env_logger::{Builder, Env, Target};

use grid_snake::platform::{FramePacer, map_key_event, should_quit};
use grid_snake::renderer::{TermView, TerminalRenderer};
use grid_snake::settings::SETTINGS_FILE;
use grid_snake::{Leaderboard, Settings, StateMachine};

const LOG_FILE: &str = "snake.log";

fn init_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match File::create(LOG_FILE) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!("Could not open {LOG_FILE} ({e}), logging to stderr"),
    }
    builder.init();
}

fn main() -> Result<()> {
    init_logging();
    log::info!("Grid Snake starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let leaderboard = Leaderboard::load(settings.leaderboard_file.clone());
    let mut machine = StateMachine::new(settings, leaderboard, rand::random());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut machine);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::error!("Failed to restore terminal: {e}");
    }
    log::info!("Grid Snake exiting");
    result
}

fn run(term: &mut TerminalRenderer, machine: &mut StateMachine) -> Result<()> {
    let mut pacer = FramePacer::new(machine.settings().outer_fps);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut view = TermView::new(w, h);
    let mut dt = 0.0;

    loop {
        // Input: drain everything queued since last frame.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(key) = map_key_event(key) {
                        machine.handle_input(key);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        machine.advance(dt);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.begin_frame(w, h);
        machine.render(&mut view);
        term.present(view.frame())?;

        dt = pacer.wait();
    }
}
