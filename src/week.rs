/// Week and day resolution for the games calendar
///
/// Everything here is pure: callers pass in "today" and the loaded data so
/// the functions can be tested without a clock or a network.
use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::types::{DayMap, Game};

/// Number of days shown in the calendar
pub const DAYS_IN_WEEK: usize = 7;

/// Day labels in calendar order, starting Monday
pub const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_MERIDIEM: u32 = 12;

/// Monday of the calendar week containing `today`
pub fn monday_of(today: NaiveDate) -> NaiveDate {
    let dow = today.weekday().num_days_from_sunday() as i64;
    let offset = if dow == 0 { -6 } else { 1 - dow };
    today + Duration::days(offset)
}

/// The seven dates to display
///
/// With an explicit start date (from a loaded document) the week is that
/// date plus the following six days. Without one, the week is Monday through
/// Sunday of the week containing `today`.
pub fn compute_week_dates(start_date: Option<NaiveDate>, today: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
    let start = start_date.unwrap_or_else(|| monday_of(today));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Fallback week relative to the local clock
pub fn current_week_dates() -> [NaiveDate; DAYS_IN_WEEK] {
    compute_week_dates(None, Local::now().date_naive())
}

/// English weekday names for a run of dates
pub fn day_labels(week_dates: &[NaiveDate]) -> Vec<String> {
    week_dates
        .iter()
        .map(|d| d.format("%A").to_string())
        .collect()
}

/// Index of `selected` within `week_dates`, comparing calendar dates only
///
/// Falls back to 0 when the date is not part of the week.
pub fn resolve_day_index<D: Datelike>(selected: &D, week_dates: &[NaiveDate]) -> usize {
    week_dates
        .iter()
        .position(|d| d.year() == selected.year() && d.ordinal() == selected.ordinal())
        .unwrap_or(0)
}

/// Label for the selected date, taken from the parallel `labels` sequence
///
/// Returns `None` only when `labels` is empty.
pub fn resolve_day_label<'a, D, S>(selected: &D, week_dates: &[NaiveDate], labels: &'a [S]) -> Option<&'a str>
where
    D: Datelike,
    S: AsRef<str>,
{
    let index = resolve_day_index(selected, week_dates);
    labels
        .get(index)
        .or_else(|| labels.first())
        .map(|s| s.as_ref())
}

/// Parse a 12-hour start time such as "7:30p" into minutes since midnight
///
/// Only `H:MMa` / `H:MMp` is accepted (1-2 digit hour in 1..=12, two digit
/// minute, lowercase meridiem letter). Anything else is `None`.
pub fn parse_game_time(s: &str) -> Option<u32> {
    let (hour_str, rest) = s.split_once(':')?;
    if hour_str.is_empty() || hour_str.len() > 2 || !hour_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if rest.len() != 3 || !rest.is_char_boundary(2) {
        return None;
    }
    let (minute_str, meridiem) = rest.split_at(2);
    if !minute_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = minute_str.parse().ok()?;
    if !(1..=HOURS_PER_MERIDIEM).contains(&hour) || minute >= MINUTES_PER_HOUR {
        return None;
    }

    let hour = match meridiem {
        "a" if hour == HOURS_PER_MERIDIEM => 0,
        "a" => hour,
        "p" if hour == HOURS_PER_MERIDIEM => hour,
        "p" => hour + HOURS_PER_MERIDIEM,
        _ => return None,
    };
    Some(hour * MINUTES_PER_HOUR + minute)
}

/// Sort key putting parsed times first (ascending) and unknown times last
fn time_sort_key(game: &Game) -> (bool, u32) {
    match game.time.as_deref().and_then(parse_game_time) {
        Some(minutes) => (false, minutes),
        None => (true, 0),
    }
}

/// Games for one day label, ordered by start time
///
/// Missing labels give an empty list. The sort is stable, so games with
/// unknown times keep their published order at the end.
pub fn games_for_day(dataset: &DayMap<Game>, label: &str) -> Vec<Game> {
    let mut games = dataset.get(label).cloned().unwrap_or_default();
    games.sort_by_key(time_sort_key);
    games
}
