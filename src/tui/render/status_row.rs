use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key hints for the current mode
fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space toggle  e edit  d delete  f filter  ? help  q quit",
        Mode::Input => "Enter add  Esc back",
        Mode::Edit => "Enter save  Esc cancel",
        Mode::Confirm => "Enter delete  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let total = app.list.tasks().len();
    let done = app.list.tasks().iter().filter(|t| t.completed).count();
    let noun = if total == 1 { "todo" } else { "todos" };

    let mut spans = vec![Span::styled(
        format!(" {} {}, {} done", total, noun, done),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    if app.show_key_hints {
        let hint = mode_hint(app.mode);
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
