/// Routed views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Games,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Games];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Games => "Games & Predictions",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Route::Home => 0,
            Route::Games => 1,
        }
    }
}

/// Which week the games view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    CurrentWeek,
    LastWeek,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::CurrentWeek => ViewMode::LastWeek,
            ViewMode::LastWeek => ViewMode::CurrentWeek,
        }
    }

    /// Label of the toggle control, naming the *other* mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ViewMode::CurrentWeek => "View Last Week's Predictions",
            ViewMode::LastWeek => "View Upcoming Games",
        }
    }
}

/// Direction of the last day change, used to animate the day panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    None,
    Left,
    Right,
}
