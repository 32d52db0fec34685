pub mod action;
pub mod common;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod types;
pub mod views;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{Route, ViewMode};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use crate::config::Config;
use crate::data_provider::WeekDataProvider;

/// Draw the whole screen: route tabs, the routed view, the status bar
pub fn draw(f: &mut Frame, state: &AppState) {
    let config = &state.system.config;
    let chars = config.display.box_chars();
    let [tabs_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(f.area());

    let route_labels: Vec<&str> = Route::ALL.iter().map(|r| r.label()).collect();
    common::tab_bar::render(
        f,
        tabs_area,
        &route_labels,
        state.navigation.route.index(),
        config.theme.selection_fg,
        &chars,
    );

    match state.navigation.route {
        Route::Home => views::home::render(f, content_area, state),
        Route::Games => views::games::render(f, content_area, state),
    }

    common::status_bar::render(
        f,
        status_area,
        state.data.loading,
        state.system.last_refresh,
        state.system.status_message.as_deref(),
        state.system.status_is_error,
        config.theme.incorrect_fg,
        &chars,
    );
}

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn WeekDataProvider>, config: Config) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));
    let mut initial_state = AppState::new(config, Local::now().date_naive());
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);

    // One-shot fetch on entry
    runtime.dispatch(Action::RefreshData);

    loop {
        // Process actions from effects first so loaded data renders immediately
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| draw(f, runtime.state()))?;

        if actions_processed > 0 {
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, runtime.state()) {
                    if matches!(action, Action::Quit) {
                        tracing::debug!("ACTION: Quitting application");
                        break;
                    }
                    runtime.dispatch(action);
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use crate::tui::testing::buffer_lines;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render_lines(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_home_route() {
        let mut state = AppState::new(Config::default(), date(2024, 12, 19));
        state.system.reset_status_message();
        let lines = render_lines(&state, 100, 16);

        assert!(lines[0].starts_with("Home │ Games & Predictions"));
        assert!(lines.iter().any(|l| l.contains(views::home::TITLE)));
        assert!(lines[15].contains("Not loaded"));
        assert!(lines[15].contains("q quit"));
    }

    #[test]
    fn test_draw_games_route_after_key_presses() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut state = AppState::new(Config::default(), date(2024, 12, 19));
        let doc = fixtures::sample_week(date(2024, 12, 16));
        (state, _) = reduce(state, Action::WeekLoaded(Ok(doc)));

        for code in [KeyCode::Char('2'), KeyCode::Right] {
            let action = key_to_action(KeyEvent::new(code, KeyModifiers::NONE), &state).unwrap();
            (state, _) = reduce(state, action);
        }

        let text = render_lines(&state, 100, 30).join("\n");
        assert!(text.contains("Friday - Fri Dec 20 ►"));
        assert!(text.contains("Updated "));
    }
}
