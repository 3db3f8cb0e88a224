mod confirm;
mod line_edit;
mod navigate;
mod text;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

pub use line_edit::LineEdit;

use confirm::handle_confirm;
use navigate::handle_navigate;
use text::{handle_edit, handle_input};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows one key to close
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }

    app.collect_notices(Instant::now());
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::model::Config;

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = App::new(&Config::default());
        press_char(&mut app, 'a');
        assert_eq!(app.mode, Mode::Input);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_closes_on_next_key() {
        let mut app = App::new(&Config::default());
        press_char(&mut app, '?');
        assert!(app.show_help);
        press_char(&mut app, 'q');
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
