use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::util::relative_time::time_since;
use crate::util::unicode;

use super::helpers::{clipped_line_edit_spans, spans_width};

const EMPTY_PLACEHOLDER: &str = "No todos yet!";
const SAVE_HINT: &str = "Enter save";

/// Render the filtered, newest-first task list
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    render_list_view_at(frame, app, area, Local::now());
}

pub(super) fn render_list_view_at(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let bg = app.theme.background;
    let visible = app.list.visible();

    if visible.is_empty() {
        // Leave a blank row above the placeholder
        let row = Rect::new(area.x, area.y + 1.min(area.height.saturating_sub(1)), area.width, 1);
        let empty = Paragraph::new(EMPTY_PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, row);
        return;
    }

    let height = area.height as usize;
    let scroll = if app.cursor >= height {
        app.cursor + 1 - height
    } else {
        0
    };

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, task)| task_line(app, task, i == app.cursor, area.width as usize, &now))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line(
    app: &App,
    task: &Task,
    is_cursor: bool,
    width: usize,
    now: &DateTime<Local>,
) -> Line<'static> {
    let editing = app.list.is_editing(task.id);
    let selected = is_cursor && app.mode != Mode::Input;
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let check_color = if task.completed {
        app.theme.green
    } else {
        app.theme.dim
    };
    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(task.checkbox(), Style::default().fg(check_color).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];

    // Right column: "time since" normally, the save hint while editing
    let (right, right_style) = if editing {
        (
            SAVE_HINT.to_string(),
            Style::default().fg(app.theme.highlight).bg(bg),
        )
    } else {
        (
            time_since(&task.created_at, now),
            Style::default().fg(app.theme.dim).bg(bg),
        )
    };
    let right_width = unicode::display_width(&right) + 1;
    let text_budget = width.saturating_sub(spans_width(&spans) + right_width + 2);

    if editing {
        let draft_style = Style::default().fg(app.theme.text_bright).bg(bg);
        spans.extend(clipped_line_edit_spans(&app.edit_line, draft_style, text_budget));
    } else {
        let mut text_style = Style::default().fg(app.theme.task_color(task.completed)).bg(bg);
        if task.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }
        if selected {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.text, text_budget),
            text_style,
        ));
    }

    let used = spans_width(&spans);
    if used + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, right_style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterMode;
    use crate::tui::input::LineEdit;
    use crate::tui::render::test_helpers::*;

    fn list_text(app: &App) -> String {
        render_to_string(40, 6, |frame, area| {
            render_list_view_at(frame, app, area, Local::now())
        })
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let app = app_with_tasks(&[]);
        let output = list_text(&app);
        assert!(output.contains(EMPTY_PLACEHOLDER));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn filtered_to_nothing_shows_placeholder() {
        let mut app = app_with_tasks(&["A"]);
        app.list.set_filter(FilterMode::Completed);
        assert!(list_text(&app).contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn newest_first_with_time_since() {
        let app = app_with_tasks(&["First", "Second"]);
        let output = list_text(&app);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" [ ] Second"));
        assert!(lines[1].starts_with(" [ ] First"));
        assert!(lines[0].ends_with("less than a minute"));
    }

    #[test]
    fn row_is_full_width() {
        let app = app_with_tasks(&["Task"]);
        let output = render_to_string(40, 1, |frame, area| {
            render_list_view_at(frame, &app, area, Local::now())
        });
        // " [ ] Task" + padding + "less than a minute" + trailing space (trimmed)
        assert_eq!(unicode::display_width(&output), 39);
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(100);
        let app = app_with_tasks(&[long.as_str()]);
        let output = list_text(&app);
        assert!(output.contains('\u{2026}'));
        assert!(output.contains("less than a minute"));
    }

    #[test]
    fn editing_row_shows_draft_and_save_hint() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let id = app.list.tasks()[0].id;
        app.list.begin_edit(id, "Buy milk");
        app.list.set_draft("Buy oat milk");
        app.edit_line = LineEdit::with_text("Buy oat milk");
        app.mode = Mode::Edit;
        let output = list_text(&app);
        assert!(output.contains("[ ] Buy oat milk"));
        assert!(output.ends_with(SAVE_HINT));
        assert!(!output.contains("less than a minute"));
    }

    #[test]
    fn long_draft_keeps_cursor_and_hint_on_screen() {
        let mut app = app_with_tasks(&["Short"]);
        let id = app.list.tasks()[0].id;
        let long = "y".repeat(60);
        app.list.begin_edit(id, long.clone());
        app.edit_line = LineEdit::with_text(long);
        app.mode = Mode::Edit;
        let output = list_text(&app);
        assert_eq!(output.lines().count(), 1);
        assert!(unicode::display_width(&output) <= 40);
        assert!(output.ends_with(SAVE_HINT));
        assert!(output.contains("yyyy"));
    }

    #[test]
    fn cursor_scrolls_into_view() {
        let texts: Vec<String> = (0..10).map(|i| format!("Task {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut app = app_with_tasks(&refs);
        app.cursor = 8; // "Task 1"
        let output = list_text(&app);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[5].starts_with(" [ ] Task 1 "));
        assert!(lines[0].starts_with(" [ ] Task 6 "));
    }
}
