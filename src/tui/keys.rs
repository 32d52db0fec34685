/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use super::types::Route;

/// Handle global keys that work on every route
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::RefreshData),
        KeyCode::Tab => Some(Action::NavigateNext),
        _ => None,
    }
}

/// Handle direct route switching via number keys
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::Navigate(Route::Home)),
        KeyCode::Char('2') => Some(Action::Navigate(Route::Games)),
        _ => None,
    }
}

fn handle_games_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectPreviousDay),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectNextDay),
        KeyCode::Home => Some(Action::SelectDay(0)),
        KeyCode::End => Some(Action::SelectDay(usize::MAX)),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleViewMode),
        _ => None,
    }
}

fn handle_home_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Enter | KeyCode::Right => Some(Action::Navigate(Route::Games)),
        _ => None,
    }
}

/// Convert a key event into an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} on {:?}", key.code, state.navigation.route);

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }
    if let Some(action) = handle_number_keys(key.code) {
        return Some(action);
    }

    match state.navigation.route {
        Route::Home => handle_home_keys(key.code),
        Route::Games => handle_games_keys(key.code),
    }
}
