use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;

/// Filter selector with the visible count, and a separator below
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let current = app.list.filter();

    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(app.theme.purple).bg(bg),
    )];
    spans.push(Span::styled(
        current.label(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!(" ({})", app.list.visible_count()),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    // The other choices, dimmed, with their number keys
    spans.push(Span::styled("   ", Style::default().bg(bg)));
    for (i, mode) in FilterMode::ALL.iter().enumerate() {
        if *mode == current {
            continue;
        }
        spans.push(Span::styled(
            format!(" {}:{}", i + 1, mode.label()),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_mode_and_filtered_count() {
        let mut app = app_with_tasks(&["A", "B", "C"]);
        let a = app.list.tasks()[0].id;
        app.list.toggle_complete(a).unwrap();
        app.list.set_filter(FilterMode::Pending);

        let output = render_to_string(50, 2, |frame, area| render_filter_bar(frame, &app, area));
        let first = output.lines().next().unwrap();
        assert_eq!(first, " Filter: Pending (2)    1:All 3:Completed");
        assert_eq!(output.lines().nth(1).unwrap(), "\u{2500}".repeat(50));
    }
}
