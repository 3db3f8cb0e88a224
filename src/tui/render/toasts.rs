use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};

use crate::ops::notice::NoticeKind;
use crate::tui::app::App;
use crate::util::unicode;

/// Stack active toasts in the top-right corner, oldest on top
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    for (i, toast) in app.toasts.iter().enumerate() {
        let row = i as u16;
        if row >= area.height {
            break;
        }
        let icon = match toast.notice.kind {
            NoticeKind::Error => "\u{2717}",
            NoticeKind::Success => "\u{2713}",
        };
        let max = area.width.saturating_sub(2) as usize;
        let text = unicode::truncate_to_width(&format!(" {} {} ", icon, toast.notice.message), max);
        let width = unicode::display_width(&text) as u16;

        let x = area.x + area.width.saturating_sub(width + 1);
        let rect = Rect::new(x, area.y + row, width, 1);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Span::styled(
                text,
                Style::default()
                    .fg(app.theme.notice_color(toast.notice.kind))
                    .bg(app.theme.toast_bg)
                    .add_modifier(Modifier::BOLD),
            )),
            rect,
        );
    }
}
