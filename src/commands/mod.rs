pub mod games;
pub mod predictions;
pub mod teams;
pub mod week;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

/// Parse optional date string, defaulting to `today`
///
/// Accepts dates in YYYY-MM-DD format. Returns an error if the date string is malformed.
pub fn parse_date_or(date: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)),
        None => Ok(today),
    }
}

/// Parse optional date string, defaulting to the local date
pub fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    parse_date_or(date, Local::now().date_naive())
}

/// Match a user-supplied day name against the week's labels, ignoring case
///
/// Returns the label's index.
pub fn find_day<S: AsRef<str>>(day: &str, labels: &[S]) -> Result<usize> {
    let wanted = day.trim();
    match labels
        .iter()
        .position(|l| l.as_ref().eq_ignore_ascii_case(wanted))
    {
        Some(index) => Ok(index),
        None => {
            let known: Vec<&str> = labels.iter().map(|l| l.as_ref()).collect();
            bail!("Unknown day '{}'. Expected one of: {}", day, known.join(", "))
        }
    }
}
