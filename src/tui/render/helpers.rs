use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::input::LineEdit;
use crate::util::unicode;

/// Spans for an editable line with the cursor cell shown reversed
pub(super) fn line_edit_spans(le: &LineEdit, style: Style) -> Vec<Span<'static>> {
    let (before, rest) = le.text.split_at(le.cursor.min(le.text.len()));
    let mut graphemes = rest.graphemes(true);
    let under = graphemes.next().unwrap_or(" ").to_string();
    let after: String = graphemes.collect();

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), style));
    }
    spans.push(Span::styled(under, style.add_modifier(Modifier::REVERSED)));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    spans
}

/// Like [`line_edit_spans`], but showing at most `max_width` cells of the
/// text, scrolled so the cursor cell stays in view
pub(super) fn clipped_line_edit_spans(
    le: &LineEdit,
    style: Style,
    max_width: usize,
) -> Vec<Span<'static>> {
    let cursor = le.cursor.min(le.text.len());
    let graphemes: Vec<(usize, &str)> = le.text.grapheme_indices(true).collect();
    let cell_width = |g: &str| unicode::display_width(g).max(1);

    let cursor_idx = graphemes
        .iter()
        .position(|(i, _)| *i >= cursor)
        .unwrap_or(graphemes.len());
    let cursor_w = graphemes.get(cursor_idx).map_or(1, |(_, g)| cell_width(g));

    // Drop graphemes on the left until the cursor cell fits
    let mut start = 0;
    let mut used: usize = graphemes[..cursor_idx]
        .iter()
        .map(|(_, g)| cell_width(g))
        .sum::<usize>()
        + cursor_w;
    while used > max_width && start < cursor_idx {
        used -= cell_width(graphemes[start].1);
        start += 1;
    }

    // Then fill the remaining room right of the cursor
    let mut end = (cursor_idx + 1).min(graphemes.len());
    while end < graphemes.len() && used + cell_width(graphemes[end].1) <= max_width {
        used += cell_width(graphemes[end].1);
        end += 1;
    }

    let start_byte = graphemes.get(start).map_or(le.text.len(), |(i, _)| *i);
    let end_byte = graphemes.get(end).map_or(le.text.len(), |(i, _)| *i);
    let window = LineEdit {
        text: le.text[start_byte..end_byte].to_string(),
        cursor: cursor - start_byte,
    };
    line_edit_spans(&window, style)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
