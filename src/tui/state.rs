use std::time::SystemTime;

use chrono::NaiveDate;

use crate::config::Config;
use crate::loader::WeekData;
use crate::week::{self, DAYS_IN_WEEK};

use super::types::{Route, SlideDirection, ViewMode};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub data: WeekData,
    pub games: GamesUiState,
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        let mut state = Self {
            system: SystemState {
                config,
                today,
                ..Default::default()
            },
            ..Default::default()
        };
        state.games.selected_date = today;
        state
    }

    /// The seven dates currently on display
    pub fn week_dates(&self) -> [NaiveDate; DAYS_IN_WEEK] {
        self.data.week_dates(self.system.today)
    }

    pub fn day_labels(&self) -> Vec<String> {
        self.data.ordered_days(&self.week_dates())
    }

    /// Index of the selected date in the week (0 when it falls outside)
    pub fn selected_index(&self) -> usize {
        week::resolve_day_index(&self.games.selected_date, &self.week_dates())
    }

    pub fn selected_label(&self) -> String {
        self.data.label_for(self.games.selected_date, self.system.today)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub route: Route,
}

#[derive(Debug, Clone, Default)]
pub struct GamesUiState {
    pub selected_date: NaiveDate,
    pub view_mode: ViewMode,
    /// Direction of the last day change
    pub slide: SlideDirection,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: 1/2 views | Tab switch | ←→ day | t toggle week | r refresh | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub today: NaiveDate,
    pub last_refresh: Option<SystemTime>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
