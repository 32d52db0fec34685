use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::formatting::BoxChars;

/// Width of the ` │ ` gap between two labels
const GAP_WIDTH: usize = 3;

/// Build the line drawn under a row of labels separated by ` │ `
///
/// A connector sits under each gap so the vertical bars join the line.
pub fn build_tab_separator_line<'a, I, S>(labels: I, area_width: usize, style: Style, box_chars: &BoxChars) -> Line<'a>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let horizontal = box_chars.horizontal;
    let mut spans = Vec::new();
    let mut pos = 0;

    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(horizontal.to_string(), style));
            spans.push(Span::styled(box_chars.tab_connector.to_string(), style));
            spans.push(Span::styled(horizontal.to_string(), style));
            pos += GAP_WIDTH;
        }
        let width = label.as_ref().width();
        spans.push(Span::styled(horizontal.repeat(width), style));
        pos += width;
    }

    if pos < area_width {
        spans.push(Span::styled(horizontal.repeat(area_width - pos), style));
    }

    Line::from(spans)
}
