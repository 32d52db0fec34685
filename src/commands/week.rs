use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::data_provider::WeekDataProvider;
use crate::formatting::{format_header, pad_to_width};
use crate::loader::WeekData;

const LABEL_WIDTH: usize = 10;
const DATE_WIDTH: usize = 12;

fn games_count(n: usize) -> String {
    match n {
        0 => "no games".to_string(),
        1 => "1 game".to_string(),
        n => format!("{} games", n),
    }
}

/// Seven-day calendar with per-day game counts; `today` is marked
pub fn format_week(data: &WeekData, today: NaiveDate, config: &Config) -> String {
    let dates = data.week_dates(today);
    let labels = data.ordered_days(&dates);
    let selector = config.display.box_chars().selector;

    let title = format!(
        "Week of {} to {}",
        dates[0].format(&config.date_format),
        dates[dates.len() - 1].format(&config.date_format)
    );
    let mut output = format_header(&title, true, &config.display);
    output.push('\n');

    for (date, label) in dates.iter().zip(&labels) {
        let marker = if *date == today { selector } else { " " };
        output.push_str(&format!(
            "{} {}{}{}\n",
            marker,
            pad_to_width(label, LABEL_WIDTH + 1),
            pad_to_width(&date.format(&config.date_format).to_string(), DATE_WIDTH + 1),
            games_count(data.games_for(label).len())
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {}\n", games_count(data.total_games())));
    if let Some(updated) = data
        .document
        .as_ref()
        .and_then(|d| d.metadata.last_updated.as_deref())
    {
        output.push_str(&format!("Last updated: {}\n", updated));
    }
    output
}

pub async fn run(client: &dyn WeekDataProvider, config: &Config) -> Result<()> {
    let data = WeekData::load(client).await;
    if let Some(e) = &data.error {
        eprintln!("Week data unavailable ({}); showing the current calendar week.", e);
    }
    println!();
    print!("{}", format_week(&data, Local::now().date_naive(), config));
    Ok(())
}
