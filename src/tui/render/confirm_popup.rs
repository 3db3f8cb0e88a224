use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

/// Render the delete confirmation popup for the pending deletion
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(task) = app.list.pending_delete().and_then(|id| app.list.get(id)) else {
        return;
    };

    let bg = app.theme.background;
    let highlight = app.theme.highlight;

    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let warn_style = Style::default().fg(app.theme.red).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(" Delete Todo", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(
            format!("  {}", unicode::truncate_to_width(&task.text, inner_w.saturating_sub(4))),
            bright_style,
        )),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(
            "  Are you sure you want to delete this todo?",
            text_style,
        )),
        Line::from(Span::styled("  This action cannot be undone.", warn_style)),
        Line::from(Span::styled("", text_style)),
        // Key hints
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", dim_style),
            Span::styled(" delete  ", text_style),
            Span::styled("Esc", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
