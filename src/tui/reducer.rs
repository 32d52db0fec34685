use std::time::SystemTime;

use tracing::{debug, trace};

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;
use super::types::{Route, SlideDirection};
use crate::week::{self, DAYS_IN_WEEK};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; fetches are returned as `Effect::FetchWeek`.
///
/// Ownership is passed through the sub-reducer chain:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_games(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_data_loading(state, action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    (state, Effect::None)
}

fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut new_state = state;
    match action {
        Action::Navigate(route) => {
            trace!("Navigating to {:?}", route);
            new_state.navigation.route = *route;
        }
        Action::NavigateNext => {
            let next = (new_state.navigation.route.index() + 1) % Route::ALL.len();
            new_state.navigation.route = Route::ALL[next];
        }
        Action::Quit => {}
        _ => return Err(new_state),
    }
    Ok((new_state, Effect::None))
}

fn reduce_games(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectPreviousDay => {
            let index = state.selected_index();
            Ok(select_day(state, index.saturating_sub(1)))
        }
        Action::SelectNextDay => {
            let index = state.selected_index();
            Ok(select_day(state, index + 1))
        }
        Action::SelectDay(index) => Ok(select_day(state, *index)),
        Action::ToggleViewMode => {
            let mut new_state = state;
            new_state.games.view_mode = new_state.games.view_mode.toggled();
            debug!("Games view mode: {:?}", new_state.games.view_mode);
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

/// Move the selection to `index` (clamped to the week) and record the slide direction
fn select_day(state: AppState, index: usize) -> (AppState, Effect) {
    let mut new_state = state;
    let dates = new_state.week_dates();
    let current = new_state.selected_index();
    let target = index.min(DAYS_IN_WEEK - 1);

    new_state.games.slide = match target.cmp(&current) {
        std::cmp::Ordering::Less => SlideDirection::Left,
        std::cmp::Ordering::Greater => SlideDirection::Right,
        std::cmp::Ordering::Equal => SlideDirection::None,
    };
    new_state.games.selected_date = dates[target];
    trace!(
        "Selected day {} ({}) slide={:?}",
        target,
        new_state.games.selected_date,
        new_state.games.slide
    );
    (new_state, Effect::None)
}

fn reduce_data_loading(state: AppState, action: Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RefreshData => {
            // The first load may be served from the cache; later refreshes refetch
            let force = state.data.document.is_some();
            debug!("DATA: Refresh requested (force={})", force);
            let mut new_state = state;
            new_state.data.loading = true;
            new_state.system.set_status_message("Refreshing...".to_string());
            Ok((new_state, Effect::FetchWeek { force }))
        }
        Action::WeekLoaded(result) => Ok(handle_week_loaded(state, result)),
        _ => Err(state),
    }
}

fn handle_week_loaded(state: AppState, result: Result<crate::types::WeekDocument, String>) -> (AppState, Effect) {
    let mut new_state = state;
    let failed = result.is_err();
    new_state.data.apply(result, "tui");
    new_state.system.last_refresh = Some(SystemTime::now());

    // Keep the selection inside the (possibly new) week, preferring today
    let dates = new_state.week_dates();
    let previous = new_state.games.selected_date;
    let today = new_state.system.today;
    let anchor = if dates.iter().any(|d| *d == previous) {
        previous
    } else {
        today
    };
    new_state.games.selected_date = dates[week::resolve_day_index(&anchor, &dates)];
    new_state.games.slide = SlideDirection::None;

    if failed {
        new_state
            .system
            .set_status_error_message("Could not load games. Press r to retry.".to_string());
    } else {
        new_state.system.reset_status_message();
    }
    debug!(
        "DATA: Week loaded; {} games, selected {}",
        new_state.data.total_games(),
        new_state.games.selected_date
    );
    (new_state, Effect::None)
}
