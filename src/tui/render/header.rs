use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::clipped_line_edit_spans;

const TITLE: &str = " My Todo-s";
const PLACEHOLDER: &str = "Add new...";

/// Title row and the add box
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let title = Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let focused = app.mode == Mode::Input;
    let prompt_color = if focused {
        app.theme.highlight
    } else {
        app.theme.purple
    };
    let mut input_spans = vec![Span::styled(
        " + ",
        Style::default().fg(prompt_color).bg(bg),
    )];
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    if focused {
        let budget = (area.width as usize).saturating_sub(4);
        input_spans.extend(clipped_line_edit_spans(&app.input, text_style, budget));
    } else if app.input.text.is_empty() {
        input_spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        input_spans.push(Span::styled(app.input.text.clone(), text_style));
    }

    let paragraph =
        Paragraph::new(vec![title, Line::from(input_spans)]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
