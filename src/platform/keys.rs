//! Key mapping from crossterm events to game keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::Key;

/// Translate a key-down event. Releases, repeats of non-text keys and
/// unmapped keys give `None`.
pub fn map_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match event.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Ctrl+C or Ctrl+Q ends the program. Plain letters are never quit keys
/// because they are valid name characters.
pub fn should_quit(event: KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C' | 'q' | 'Q'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Key::Char('w'))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Key::Space)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(Key::Backspace)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn test_release_and_chords_ignored() {
        let mut release = KeyEvent::from(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key_event(release), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
        // Shifted letters still type
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Char('A'))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
