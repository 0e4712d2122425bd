//! Key mapping from terminal events to simulation actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(SimAction::Start),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(SimAction::Pause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(SimAction::Step),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Reset),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_start_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(SimAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(SimAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(SimAction::Start)
        );
    }

    #[test]
    fn test_run_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(SimAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(SimAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(SimAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(SimAction::Reset)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
