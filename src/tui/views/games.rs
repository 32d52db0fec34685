use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::commands::games::{format_game_card, matchup_line};
use crate::config::Config;
use crate::formatting::BoxChars;
use crate::tui::common::{styling::outcome_style, tab_bar};
use crate::tui::state::AppState;
use crate::tui::types::{SlideDirection, ViewMode};
use crate::types::GameResult;

/// Short label for a date bar cell, e.g. "Mon 16"
pub fn date_bar_label(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.system.config;
    let chars = config.display.box_chars();

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let section = match state.games.view_mode {
        ViewMode::CurrentWeek => "Upcoming Games (Next 7 Days)",
        ViewMode::LastWeek => "Last Week's Predictions",
    };
    let header = vec![
        Line::from(Span::styled(section, Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(format!("[t] {}", state.games.view_mode.toggle_label())),
    ];
    f.render_widget(Paragraph::new(header), header_area);

    if state.data.loading {
        f.render_widget(Paragraph::new("Loading games..."), body_area);
        return;
    }

    match state.games.view_mode {
        ViewMode::CurrentWeek => render_current_week(f, body_area, state, &chars),
        ViewMode::LastWeek => render_last_week(f, body_area, state, &chars),
    }
}

fn render_current_week(f: &mut Frame, area: Rect, state: &AppState, chars: &BoxChars) {
    let config = &state.system.config;
    let [bar_area, day_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let dates = state.week_dates();
    let labels: Vec<String> = dates.iter().copied().map(date_bar_label).collect();
    tab_bar::render(
        f,
        bar_area,
        &labels,
        state.selected_index(),
        config.theme.selection_fg,
        chars,
    );

    let label = state.selected_label();
    let selected = dates[state.selected_index()];
    let games = state.data.games_for(&label);

    let mut lines = vec![Line::from(Span::styled(
        day_title(&label, selected, state.games.slide, config, chars),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::raw(""));

    if games.is_empty() {
        lines.push(Line::raw("No games scheduled for this day."));
    } else {
        for game in &games {
            lines.extend(format_game_card(game, chars).lines().map(|l| Line::raw(l.to_string())));
        }
    }
    f.render_widget(Paragraph::new(lines), day_area);
}

/// "Thursday - Thu Dec 19", with an arrow showing which way the day moved
pub fn day_title(
    label: &str,
    date: NaiveDate,
    slide: SlideDirection,
    config: &Config,
    chars: &BoxChars,
) -> String {
    let title = format!("{} - {}", label, date.format(&config.date_format));
    match slide {
        SlideDirection::None => title,
        SlideDirection::Left => format!("{} {}", if config.display.use_unicode { "◄" } else { "<" }, title),
        SlideDirection::Right => format!("{} {}", title, chars.selector),
    }
}

fn render_last_week(f: &mut Frame, area: Rect, state: &AppState, chars: &BoxChars) {
    let theme = &state.system.config.theme;
    let results = state.data.last_week_results(state.system.today);

    let mut lines = vec![
        Line::raw(format!("Accuracy: {}", state.data.last_week_accuracy(state.system.today))),
        Line::raw(""),
    ];
    if results.is_empty() {
        lines.push(Line::raw("No graded predictions for last week."));
    }
    for (day, result) in &results {
        lines.extend(result_lines(day, result, chars, outcome_style(result.correct, theme.correct_fg, theme.incorrect_fg)));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn result_lines<'a>(day: &str, result: &GameResult, chars: &BoxChars, style: Style) -> Vec<Line<'a>> {
    let (mark, verdict) = if result.correct {
        (chars.check, "Correct")
    } else {
        (chars.cross, "Incorrect")
    };
    let played = match &result.date {
        Some(date) => format!("{} ({})", day, date),
        None => day.to_string(),
    };
    vec![
        Line::raw(format!(
            "{} {}",
            played,
            matchup_line(&result.home_team.name, &result.away_team.name)
        )),
        Line::from(vec![
            Span::raw(format!(
                "  Prediction: {}  Actual: {}  ",
                result.prediction, result.actual
            )),
            Span::styled(format!("{} {}", mark, verdict), style),
        ]),
        Line::raw(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::tui::testing::buffer_lines;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loaded_state(today: NaiveDate) -> AppState {
        let mut state = AppState::new(Config::default(), today);
        state.data.apply(Ok(fixtures::sample_week(date(2024, 12, 16))), "test");
        state
    }

    fn render_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, f.area(), state)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_date_bar_label() {
        assert_eq!(date_bar_label(date(2024, 12, 16)), "Mon 16");
    }

    #[test]
    fn test_day_title_slide_markers() {
        let config = Config::default();
        let chars = BoxChars::unicode();
        let d = date(2024, 12, 19);
        assert_eq!(
            day_title("Thursday", d, SlideDirection::None, &config, &chars),
            "Thursday - Thu Dec 19"
        );
        assert_eq!(
            day_title("Thursday", d, SlideDirection::Left, &config, &chars),
            "◄ Thursday - Thu Dec 19"
        );
        assert_eq!(
            day_title("Thursday", d, SlideDirection::Right, &config, &chars),
            "Thursday - Thu Dec 19 ►"
        );
    }

    #[test]
    fn test_renders_selected_day_games() {
        let state = loaded_state(date(2024, 12, 19));
        let text = render_text(&state);
        assert!(text.contains("Upcoming Games (Next 7 Days)"));
        assert!(text.contains("[t] View Last Week's Predictions"));
        assert!(text.contains("Mon 16"));
        assert!(text.contains("Sun 22"));
        assert!(text.contains("Thursday - Thu Dec 19"));
        assert!(text.contains("Time: "));
    }

    #[test]
    fn test_renders_loading_indicator() {
        let mut state = AppState::new(Config::default(), date(2024, 12, 19));
        state.data.loading = true;
        let text = render_text(&state);
        assert!(text.contains("Loading games..."));
        assert!(!text.contains("Mon 16"));
    }

    #[test]
    fn test_failed_load_shows_empty_week() {
        let mut state = AppState::new(Config::default(), date(2024, 12, 19));
        state.data.apply(Err("offline".to_string()), "test");
        let text = render_text(&state);
        assert!(text.contains("Mon 16"));
        assert!(text.contains("No games scheduled for this day."));
    }

    #[test]
    fn test_renders_last_week_with_accuracy() {
        let mut state = loaded_state(date(2024, 12, 19));
        state.games.view_mode = ViewMode::LastWeek;
        let text = render_text(&state);
        assert!(text.contains("Last Week's Predictions"));
        assert!(text.contains("[t] View Upcoming Games"));
        assert!(text.contains("Accuracy: 4/7 (57%)"));
        assert!(text.contains("Correct"));
        assert!(text.contains("Incorrect"));
    }
}
