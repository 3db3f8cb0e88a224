pub mod confirm_popup;
pub mod filter_bar;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod list_view;
pub mod status_row;
pub mod toasts;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | filter bar + separator (2 rows) | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if app.mode == Mode::Confirm {
        confirm_popup::render_confirm_popup(frame, app, area);
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    // Toasts go over everything, top-right
    toasts::render_toasts(frame, app, area);
}
