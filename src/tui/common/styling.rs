use ratatui::style::{Color, Modifier, Style};

/// Style for a tab or date cell depending on selection
pub fn selection_style(base_style: Style, is_selected: bool, selection_fg: Color) -> Style {
    if is_selected {
        base_style.fg(selection_fg).add_modifier(Modifier::BOLD)
    } else {
        base_style
    }
}

/// Style for a graded prediction outcome
pub fn outcome_style(correct: bool, correct_fg: Color, incorrect_fg: Color) -> Style {
    if correct {
        Style::default().fg(correct_fg)
    } else {
        Style::default().fg(incorrect_fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_style_selected() {
        let base = Style::default();
        let result = selection_style(base, true, Color::Red);
        assert_eq!(result, base.fg(Color::Red).add_modifier(Modifier::BOLD));
    }

    #[test]
    fn test_selection_style_not_selected() {
        let base = Style::default().fg(Color::DarkGray);
        assert_eq!(selection_style(base, false, Color::Red), base);
    }

    #[test]
    fn test_outcome_style() {
        assert_eq!(outcome_style(true, Color::Green, Color::Red).fg, Some(Color::Green));
        assert_eq!(outcome_style(false, Color::Green, Color::Red).fg, Some(Color::Red));
    }
}
