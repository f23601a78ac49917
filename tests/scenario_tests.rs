//! End-to-end gameplay scenarios through the public API

use chrono::NaiveDate;

use grid_snake::highscores::MAX_HIGH_SCORES;
use grid_snake::renderer::TermView;
use grid_snake::sim::{Cell, DeathCause, Direction, Session, SessionRules, Snake, TickOutcome};
use grid_snake::states::{GameOverPhase, ReturnTo, Screen};
use grid_snake::{Key, Leaderboard, Settings, StateMachine};

fn rules() -> SessionRules {
    SessionRules::from(&Settings::default())
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn eating_grows_and_scores() {
    let mut session = Session::new(&Settings::default(), 42);
    let body: Vec<Cell> = session.snake().body().iter().copied().collect();
    assert_eq!(body, vec![Cell::new(16, 16), Cell::new(15, 16), Cell::new(14, 16)]);

    session.place_target(Cell::new(17, 16));
    assert_eq!(session.update(), TickOutcome::Ate);
    assert_eq!(session.score(), 10);
    // Growth shows on the following step
    session.place_target(Cell::new(0, 0));
    assert_eq!(session.update(), TickOutcome::Moved);
    assert_eq!(session.snake().len(), 4);
    assert!(!session.snake().occupies(session.target()));
}

#[test]
fn reversal_request_is_dropped() {
    let mut session = Session::new(&Settings::default(), 7);
    session.place_target(Cell::new(0, 0));
    session.change_direction(Direction::Left);
    assert_eq!(session.update(), TickOutcome::Moved);
    assert_eq!(session.snake().head(), Cell::new(17, 16));
    assert_eq!(session.snake().current_direction(), Direction::Right);
    assert!(session.alive());
}

#[test]
fn wall_death_freezes_the_tick() {
    let snake = Snake::new(Cell::new(0, 16), 3, Direction::Left);
    let mut session = Session::with_snake(rules(), snake, 1);
    session.place_target(Cell::new(20, 20));

    assert_eq!(session.update(), TickOutcome::Died(DeathCause::Wall));
    assert!(!session.alive());
    assert_eq!(session.snake().head(), Cell::new(-1, 16));
    assert_eq!(session.score(), 0);
    assert_eq!(session.target(), Cell::new(20, 20));

    // No resurrection
    assert_eq!(session.update(), TickOutcome::Dead);
    assert_eq!(session.snake().head(), Cell::new(-1, 16));
}

#[test]
fn full_board_keeps_its_best_ten() {
    let mut lb = Leaderboard::in_memory();
    for score in (40..=130).step_by(10) {
        lb.add_dated("ANN", score, day());
    }
    assert_eq!(lb.len(), MAX_HIGH_SCORES);

    assert!(!lb.is_high_score(35));
    assert_eq!(lb.add_dated("BOB", 35, day()), None);
    assert!(lb.entries().iter().all(|e| e.name == "ANN"));
    assert_eq!(lb.entries().last().map(|e| e.score), Some(40));

    assert_eq!(lb.add_dated("BOB", 45, day()), Some(10));
    assert_eq!(lb.len(), MAX_HIGH_SCORES);
    let last = &lb.entries()[MAX_HIGH_SCORES - 1];
    assert_eq!((last.name.as_str(), last.score), ("BOB", 45));
    assert!(lb.entries().iter().all(|e| e.score != 40));
}

#[test]
fn name_entry_through_the_state_machine() {
    let mut sm = StateMachine::new(Settings::default(), Leaderboard::in_memory(), 9);

    // Target right ahead of the head, so the game scores before it ends
    let snake = Snake::new(Cell::new(5, 5), 3, Direction::Right);
    let mut session = Session::with_snake(rules(), snake, 9);
    session.place_target(Cell::new(6, 5));
    sm.start_session(session);

    sm.advance(0.1);
    match sm.screen() {
        Screen::Playing(p) => assert_eq!(p.session().score(), 10),
        other => panic!("expected playing, got {}", other.name()),
    }

    // Steer up into the top wall
    sm.handle_input(Key::Up);
    let mut frames = 0;
    while !matches!(sm.screen(), Screen::GameOver(_)) {
        sm.advance(0.1);
        frames += 1;
        assert!(frames < 100, "session never ended");
    }

    match sm.screen() {
        Screen::GameOver(g) => {
            assert!(g.score() >= 10);
            assert!(g.is_high_score());
            assert_eq!(g.phase(), GameOverPhase::NameEntry);
        }
        other => panic!("expected game over, got {}", other.name()),
    }

    // Whitespace-only name is refused
    sm.handle_input(Key::Space);
    sm.handle_input(Key::Enter);
    assert!(sm.leaderboard().is_empty());
    assert!(matches!(
        sm.screen(),
        Screen::GameOver(g) if g.phase() == GameOverPhase::NameEntry
    ));

    sm.handle_input(Key::Backspace);
    for c in ['a', 'l'] {
        sm.handle_input(Key::Char(c));
    }
    sm.handle_input(Key::Enter);
    assert_eq!(sm.leaderboard().len(), 1);
    assert_eq!(sm.leaderboard().entries()[0].name, "AL");
    let score = match sm.screen() {
        Screen::GameOver(g) => {
            assert_eq!(g.phase(), GameOverPhase::Done);
            g.score()
        }
        other => panic!("expected game over, got {}", other.name()),
    };

    sm.handle_input(Key::Char('l'));
    match sm.screen() {
        Screen::Leaderboard(l) => {
            assert!(matches!(l.return_to(), ReturnTo::GameOver(_)));
            assert_eq!(l.entries().len(), 1);
        }
        other => panic!("expected leaderboard, got {}", other.name()),
    }

    // Back lands on the same finished game, past name entry
    sm.handle_input(Key::Escape);
    match sm.screen() {
        Screen::GameOver(g) => {
            assert_eq!(g.score(), score);
            assert_eq!(g.phase(), GameOverPhase::Done);
        }
        other => panic!("expected game over, got {}", other.name()),
    }
}

#[test]
fn terminal_view_draws_every_screen() {
    let mut sm = StateMachine::new(Settings::default(), Leaderboard::in_memory(), 2);
    let mut view = TermView::new(100, 40);

    let frame_text = |view: &TermView| -> String {
        let fb = view.frame();
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    };

    view.begin_frame(100, 40);
    sm.render(&mut view);
    assert!(frame_text(&view).contains("PRESS SPACE TO PLAY"));

    sm.handle_input(Key::Enter);
    view.begin_frame(100, 40);
    sm.render(&mut view);
    assert!(frame_text(&view).contains("SCORE  0"));

    sm.handle_input(Key::Escape);
    sm.handle_input(Key::Char('l'));
    view.begin_frame(100, 40);
    sm.render(&mut view);
    assert!(frame_text(&view).contains("No scores yet. Play a game!"));
}
