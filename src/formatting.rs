use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for game cards and headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: &'static str,
    pub double_horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub left_junction: &'static str,
    pub right_junction: &'static str,
    /// Joins a tab separator line under the gap between two tabs
    pub tab_connector: &'static str,
    /// Joins the status bar line above its vertical divider
    pub bar_connector: &'static str,
    pub selector: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─",
            double_horizontal: "═",
            vertical: "│",
            top_left: "┌",
            top_right: "┐",
            bottom_left: "└",
            bottom_right: "┘",
            left_junction: "├",
            right_junction: "┤",
            tab_connector: "┴",
            bar_connector: "┬",
            selector: "►",
            check: "✓",
            cross: "✗",
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-",
            double_horizontal: "=",
            vertical: "|",
            top_left: "+",
            top_right: "+",
            bottom_left: "+",
            bottom_right: "+",
            left_junction: "+",
            right_junction: "+",
            tab_connector: "-",
            bar_connector: "-",
            selector: ">",
            check: "v",
            cross: "x",
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline of matching display width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let chars = display.box_chars();
    let separator = if double_line {
        chars.double_horizontal
    } else {
        chars.horizontal
    };
    format!("{}\n{}\n", text, separator.repeat(text.width()))
}

/// Right-pad `text` with spaces to `width` terminal columns
///
/// Emoji logos are two columns wide, so `format!("{:<w$}")` would misalign.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// Horizontal card border, e.g. `┌────┐`
pub fn card_border(left: &str, right: &str, fill: &str, inner_width: usize) -> String {
    format!("{}{}{}", left, fill.repeat(inner_width), right)
}

/// One card content line, padded to `inner_width` with a one-space margin each side
pub fn card_line(text: &str, inner_width: usize, chars: &BoxChars) -> String {
    format!(
        "{} {} {}",
        chars.vertical,
        pad_to_width(text, inner_width.saturating_sub(2)),
        chars.vertical
    )
}
