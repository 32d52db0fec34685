use crate::types::WeekDocument;

use super::types::Route;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions, dispatched
/// from key events or from completed effects.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    Navigate(Route),
    NavigateNext,

    // Games view actions
    SelectPreviousDay,
    SelectNextDay,
    SelectDay(usize),
    ToggleViewMode,

    // Data actions
    RefreshData,
    WeekLoaded(Result<WeekDocument, String>),

    // System actions
    Quit,
}
