//! Key mapping from terminal events to per-seat commands.
//!
//! Two fixed control seats: player 0 on the arrow keys (Up rotates, Enter
//! hard-drops), player 1 on WASD (W rotates, Space hard-drops).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map keyboard input to a command for one of the two seats.
pub fn map_key(key: KeyEvent) -> Option<(usize, Command)> {
    match key.code {
        // Player 0: arrows + Enter
        KeyCode::Left => Some((0, Command::MoveLeft)),
        KeyCode::Right => Some((0, Command::MoveRight)),
        KeyCode::Down => Some((0, Command::SoftDrop)),
        KeyCode::Up => Some((0, Command::Rotate)),
        KeyCode::Enter => Some((0, Command::HardDrop)),

        // Player 1: WASD + Space
        KeyCode::Char('a') | KeyCode::Char('A') => Some((1, Command::MoveLeft)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some((1, Command::MoveRight)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some((1, Command::SoftDrop)),
        KeyCode::Char('w') | KeyCode::Char('W') => Some((1, Command::Rotate)),
        KeyCode::Char(' ') => Some((1, Command::HardDrop)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player0_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some((0, Command::MoveLeft))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some((0, Command::MoveRight))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some((0, Command::SoftDrop))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some((0, Command::Rotate))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some((0, Command::HardDrop))
        );
    }

    #[test]
    fn test_player1_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some((1, Command::MoveLeft))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            Some((1, Command::MoveRight))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some((1, Command::SoftDrop))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W'))),
            Some((1, Command::Rotate))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some((1, Command::HardDrop))
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('a'))));
    }
}
