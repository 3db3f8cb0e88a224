use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::todo_list::TodoError;
use crate::tui::app::{App, Mode};

/// Add box: Enter submits, Esc leaves, everything else edits the line
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit_new_task(app),
        _ => {
            app.input.apply(key);
        }
    }
}

fn submit_new_task(app: &mut App) {
    match app.list.add_task(&app.input.text) {
        Ok(id) => {
            app.input.clear();
            app.cursor = 0;
            app.focus_task(id);
        }
        // Nothing to add: focus stays in the box
        Err(TodoError::EmptyInput) => {}
        // Duplicate: the list queued a notice, the text stays for fixing
        Err(_) => {}
    }
}

/// Edit session: Enter saves, Esc abandons, everything else edits the draft
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.list.cancel_edit();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            if let Some(id) = app.list.edit_session().map(|s| s.id) {
                let _ = app.list.save_edit(id);
            }
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        _ => {
            if app.edit_line.apply(key) {
                app.list.set_draft(app.edit_line.text.clone());
            }
        }
    }
}
