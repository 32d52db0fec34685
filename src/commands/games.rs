use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::commands::{find_day, parse_date};
use crate::config::Config;
use crate::data_provider::WeekDataProvider;
use crate::formatting::{card_border, card_line, format_header, BoxChars};
use crate::loader::WeekData;
use crate::teams::team_logo;
use crate::types::Game;

/// Inner width of a game card, between the vertical borders
pub const CARD_INNER_WIDTH: usize = 62;

/// "🏀 Lakers vs Warriors 🏀", home team first
pub fn matchup_line(home: &str, away: &str) -> String {
    format!(
        "{} {} vs {} {}",
        team_logo(home).glyph(),
        home,
        away,
        team_logo(away).glyph()
    )
}

fn prediction_line(game: &Game) -> String {
    match &game.prediction {
        Some(p) if !p.is_pending() => {
            format!("Prediction: {} ({}% confidence)", p.winner, p.confidence_pct())
        }
        _ => "Prediction: pending".to_string(),
    }
}

pub fn format_game_card(game: &Game, chars: &BoxChars) -> String {
    let mut output = String::new();
    let border = |left, right| card_border(left, right, chars.horizontal, CARD_INNER_WIDTH);

    output.push_str(&border(chars.top_left, chars.top_right));
    output.push('\n');
    output.push_str(&card_line(
        &matchup_line(&game.home_team.name, &game.away_team.name),
        CARD_INNER_WIDTH,
        chars,
    ));
    output.push('\n');
    output.push_str(&border(chars.left_junction, chars.right_junction));
    output.push('\n');

    let time = game.time.as_deref().unwrap_or("TBD");
    let mut lines = vec![format!("Time: {}", time)];
    if let Some(venue) = &game.venue {
        lines.push(format!("Venue: {}", venue));
    }
    lines.push(prediction_line(game));
    for line in lines {
        output.push_str(&card_line(&line, CARD_INNER_WIDTH, chars));
        output.push('\n');
    }

    output.push_str(&border(chars.bottom_left, chars.bottom_right));
    output.push('\n');
    output
}

/// Games for one day, with a dated header
pub fn format_day(label: &str, date: NaiveDate, games: &[Game], config: &Config) -> String {
    let chars = config.display.box_chars();
    let title = format!("{} - {}", label, date.format(&config.date_format));
    let mut output = format_header(&title, true, &config.display);
    output.push('\n');

    if games.is_empty() {
        output.push_str("No games scheduled for this day.\n");
        return output;
    }

    for (i, game) in games.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_game_card(game, &chars));
    }
    output
}

pub async fn run(
    client: &dyn WeekDataProvider,
    date: Option<String>,
    day: Option<String>,
    config: &Config,
) -> Result<()> {
    let today = Local::now().date_naive();
    let selected = parse_date(date)?;
    let data = WeekData::load(client).await;

    let dates = data.week_dates(today);
    let labels = data.ordered_days(&dates);
    let label = match day {
        Some(day) => labels[find_day(&day, &labels)?].clone(),
        None => data.label_for(selected, today),
    };
    let index = find_day(&label, &labels)?;

    if let Some(e) = &data.error {
        eprintln!("Week data unavailable ({}); showing the current calendar week.", e);
    }
    println!();
    print!("{}", format_day(&label, dates[index], &data.games_for(&label), config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::week::games_for_day;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_game_card_output() {
        let doc = fixtures::sample_week(date(2024, 12, 16));
        let game = &doc.current_week["Monday"][0];
        let output = format_game_card(game, &BoxChars::unicode());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "┌──────────────────────────────────────────────────────────────┐");
        assert_eq!(lines[1], "│ 🏀 Lakers vs Warriors 🏀                                     │");
        assert_eq!(lines[2], "├──────────────────────────────────────────────────────────────┤");
        assert_eq!(lines[3], "│ Time: 7:30p                                                  │");
        assert_eq!(lines[4], "│ Venue: Crypto.com Arena                                      │");
        assert_eq!(lines[5], "│ Prediction: Lakers (58% confidence)                          │");
        assert_eq!(lines[6], "└──────────────────────────────────────────────────────────────┘");
    }

    #[test]
    fn test_unknown_team_and_missing_time() {
        let game = fixtures::create_game(9, "Sonics", "Lakers", None);
        let output = format_game_card(&game, &BoxChars::ascii());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "| S Sonics vs Lakers 🏀                                        |");
        assert_eq!(lines[3], "| Time: TBD                                                    |");
        assert_eq!(lines[4], "| Prediction: pending                                          |");
    }

    #[test]
    fn test_format_day_orders_games() {
        let mut data = crate::types::DayMap::new();
        data.insert("Friday".to_string(), fixtures::create_busy_day());
        let games = games_for_day(&data, "Friday");

        let output = format_day("Friday", date(2024, 12, 20), &games, &Config::default());
        assert!(output.starts_with("Friday - Fri Dec 20\n═══"));
        let times: Vec<&str> = output
            .lines()
            .filter_map(|l| l.strip_prefix("│ Time: "))
            .map(|l| l.trim_end_matches(['│', ' ']))
            .collect();
        assert_eq!(times, vec!["12:00p", "7:00p", "7:30p", "8:00p", "10:30p", "TBD", "TBD"]);
    }

    #[test]
    fn test_format_empty_day() {
        let output = format_day("Monday", date(2024, 12, 16), &[], &Config::default());
        assert!(output.ends_with("No games scheduled for this day.\n"));
    }
}
