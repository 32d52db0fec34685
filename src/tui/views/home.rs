use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::teams::TEAM_GLYPH;
use crate::tui::state::AppState;
use crate::tui::types::Route;

pub const TITLE: &str = "NBA Match Predictor";
pub const SUBTITLE: &str = "Advanced Machine Learning for Basketball Game Predictions";
pub const BLURB: &str =
    "Powered by cutting-edge AI algorithms to predict NBA game outcomes with confidence scores";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.system.config;
    let chars = config.display.box_chars();
    let title = if config.display.use_unicode {
        format!("{} {} {}", TEAM_GLYPH, TITLE, TEAM_GLYPH)
    } else {
        TITLE.to_string()
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(config.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(SUBTITLE),
        Line::raw(""),
        Line::raw(BLURB),
        Line::raw(""),
        Line::raw(format!(
            "{} Press Enter or 2 for {}",
            chars.selector,
            Route::Games.label()
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
