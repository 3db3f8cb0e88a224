use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterMode;
use crate::tui::app::{App, Mode};

use super::LineEdit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Movement
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor += 1;
            app.clamp_cursor();
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.list.visible_count().saturating_sub(1);
        }

        // Add box
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => app.mode = Mode::Input,

        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_cursor_task(app),
        KeyCode::Char('e') => begin_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => request_delete(app),

        // Filter
        KeyCode::Char('f') | KeyCode::Tab => {
            let next = app.list.filter().next();
            app.set_filter(next);
        }
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Pending),
        KeyCode::Char('3') => app.set_filter(FilterMode::Completed),
        _ => {}
    }
}

fn toggle_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    let _ = app.list.toggle_complete(id);
    // The task may have left the filtered view
    app.clamp_cursor();
}

fn begin_edit(app: &mut App) {
    let Some((id, text)) = app.cursor_task().map(|t| (t.id, t.text.clone())) else {
        return;
    };
    app.edit_line = LineEdit::with_text(text.clone());
    app.list.begin_edit(id, text);
    app.mode = Mode::Edit;
}

fn request_delete(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    app.list.request_delete(id);
    app.mode = Mode::Confirm;
}

#[cfg(test)]
mod tests {
    use crate::model::{Config, FilterMode};
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;
    use crossterm::event::KeyCode;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for t in texts {
            app.list.add_task(t).unwrap();
        }
        app
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with(&["A", "B"]);
        press_char(&mut app, 'j');
        press_char(&mut app, 'j');
        press_char(&mut app, 'j');
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
        press_char(&mut app, 'G');
        assert_eq!(app.cursor_task().unwrap().text, "A");
        press_char(&mut app, 'g');
        assert_eq!(app.cursor_task().unwrap().text, "B");
    }

    #[test]
    fn space_toggles_task_under_cursor() {
        let mut app = app_with(&["A", "B"]);
        press_char(&mut app, ' ');
        assert!(app.list.tasks()[1].completed); // B is on top
        assert!(!app.list.tasks()[0].completed);
        press_char(&mut app, 'x');
        assert!(!app.list.tasks()[1].completed);
    }

    #[test]
    fn toggle_out_of_filter_clamps_cursor() {
        let mut app = app_with(&["A", "B"]);
        press_char(&mut app, '2'); // pending
        press_char(&mut app, 'j');
        press_char(&mut app, ' '); // completes A
        assert_eq!(app.list.visible_count(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn filter_keys() {
        let mut app = app_with(&["A"]);
        press_char(&mut app, 'f');
        assert_eq!(app.list.filter(), FilterMode::Pending);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.list.filter(), FilterMode::Completed);
        press_char(&mut app, '1');
        assert_eq!(app.list.filter(), FilterMode::All);
        press_char(&mut app, '3');
        assert_eq!(app.list.filter(), FilterMode::Completed);
    }

    #[test]
    fn edit_starts_session_for_cursor_task() {
        let mut app = app_with(&["A", "B"]);
        press_char(&mut app, 'j');
        press_char(&mut app, 'e');
        assert_eq!(app.mode, Mode::Edit);
        let session = app.list.edit_session().unwrap();
        assert_eq!(session.draft, "A");
        assert_eq!(app.edit_line.text, "A");
        assert_eq!(app.edit_line.cursor, 1);
    }

    #[test]
    fn delete_opens_confirmation() {
        let mut app = app_with(&["A"]);
        press_char(&mut app, 'd');
        assert_eq!(app.mode, Mode::Confirm);
        assert!(app.list.pending_delete().is_some());
        assert_eq!(app.list.len(), 1);
    }

    #[test]
    fn actions_on_empty_list_do_nothing() {
        let mut app = App::new(&Config::default());
        press_char(&mut app, ' ');
        press_char(&mut app, 'e');
        press_char(&mut app, 'd');
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.list.pending_delete().is_none());
    }
}
