use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Enter) => {
            app.list.confirm_delete();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.list.cancel_delete();
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
