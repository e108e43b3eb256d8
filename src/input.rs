use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NextLevel,
    PrevLevel,
    Increment,     // drive count +1 / drive size +1, depending on focus
    Decrement,
    FocusNext,     // Tab: drive count <-> drive size
    ToggleUnit,
    ToggleInfo,    // i: level information overlay
    CycleTheme,
    ShowHelp,
    Back,
    Char(char),    // digits and '.', interpreted by the focused field
    Backspace,
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Level selector: arrows and vim h/l
        (KeyCode::Left,  _) | (KeyCode::Char('h'), _) => Action::PrevLevel,
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => Action::NextLevel,

        // Stepper: arrows, vim k/j, +/-
        (KeyCode::Up,   _) | (KeyCode::Char('k'), _) | (KeyCode::Char('+'), _) => Action::Increment,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) | (KeyCode::Char('-'), _) => Action::Decrement,

        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::FocusNext,

        (KeyCode::Char('u'), _) => Action::ToggleUnit,
        (KeyCode::Char('i'), _) => Action::ToggleInfo,
        (KeyCode::Char('t'), _) => Action::CycleTheme,
        (KeyCode::Char('?'), _)
        | (KeyCode::F(1), _)    => Action::ShowHelp,

        (KeyCode::Esc, _) => Action::Back,

        (KeyCode::Char(c), _) if c.is_ascii_digit() || c == '.' => Action::Char(c),
        (KeyCode::Backspace, _) => Action::Backspace,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(handle_key(key(KeyCode::Right)), Action::NextLevel);
        assert_eq!(handle_key(key(KeyCode::Char('h'))), Action::PrevLevel);
        assert_eq!(handle_key(key(KeyCode::Char('+'))), Action::Increment);
        assert_eq!(handle_key(key(KeyCode::Down)), Action::Decrement);
        assert_eq!(handle_key(key(KeyCode::Tab)), Action::FocusNext);
    }

    #[test]
    fn digits_and_dot_are_text_input() {
        assert_eq!(handle_key(key(KeyCode::Char('7'))), Action::Char('7'));
        assert_eq!(handle_key(key(KeyCode::Char('.'))), Action::Char('.'));
        assert_eq!(handle_key(key(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(handle_key(key(KeyCode::Char('z'))), Action::None);
    }
}
