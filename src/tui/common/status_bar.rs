use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

use crate::formatting::BoxChars;

/// Text for the right-hand side of the status bar
pub fn refresh_text(loading: bool, last_refresh: Option<SystemTime>) -> String {
    if loading {
        return "Loading...".to_string();
    }
    match last_refresh.map(|t| SystemTime::now().duration_since(t)) {
        Some(Ok(elapsed)) => format!("Updated {}s ago", elapsed.as_secs()),
        Some(Err(_)) => "Updated just now".to_string(),
        None => "Not loaded".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    f: &mut Frame,
    area: Rect,
    loading: bool,
    last_refresh: Option<SystemTime>,
    status_message: Option<&str>,
    status_is_error: bool,
    error_fg: Color,
    box_chars: &BoxChars,
) {
    let left_text = match status_message {
        Some(msg) if status_is_error => format!("ERROR: {}", msg),
        Some(msg) => msg.to_string(),
        None => String::new(),
    };
    let right_text = refresh_text(loading, last_refresh);

    // Right side is "│ <text> ": bar, space, text, trailing margin
    let right_text_with_margin = format!("{} ", right_text);
    let bar_position = area
        .width
        .saturating_sub(right_text_with_margin.width() as u16 + 2);

    let left_part = box_chars.horizontal.repeat(bar_position as usize);
    let right_part = box_chars
        .horizontal
        .repeat(area.width.saturating_sub(bar_position + 1) as usize);
    let line1 = Line::raw(format!("{}{}{}", left_part, box_chars.bar_connector, right_part));

    let mut spans = Vec::new();
    let mut left_width = 0;
    if !left_text.is_empty() {
        spans.push(Span::raw(" "));
        left_width = left_text.width() + 1;
        if status_is_error {
            spans.push(Span::styled(left_text, Style::default().fg(error_fg)));
        } else {
            spans.push(Span::raw(left_text));
        }
    }
    let padding = (bar_position as usize).saturating_sub(left_width);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::raw(box_chars.vertical));
    spans.push(Span::raw(" "));
    spans.push(Span::raw(right_text_with_margin));

    f.render_widget(Paragraph::new(vec![line1, Line::from(spans)]), area);
}
