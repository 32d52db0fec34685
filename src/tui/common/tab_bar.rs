use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::separator::build_tab_separator_line;
use super::styling::selection_style;
use crate::formatting::BoxChars;

/// Render a row of labels with the selected one highlighted, plus the separator line
///
/// Used both for the route tabs and for the seven-day date bar.
pub fn render<S: AsRef<str>>(
    f: &mut Frame,
    area: Rect,
    labels: &[S],
    selected_index: usize,
    selection_fg: Color,
    box_chars: &BoxChars,
) {
    let base_style = Style::default();
    let separator = format!(" {} ", box_chars.vertical);

    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(separator.clone(), base_style));
        }
        let style = selection_style(base_style, i == selected_index, selection_fg);
        spans.push(Span::styled(label.as_ref().to_string(), style));
    }

    let separator_line =
        build_tab_separator_line(labels.iter().map(|l| l.as_ref()), area.width as usize, base_style, box_chars);

    f.render_widget(Paragraph::new(vec![Line::from(spans), separator_line]), area);
}
