//! Test helpers for rendering tests.

use ratatui::buffer::Buffer;

/// Extract the rendered buffer as one string per row
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
