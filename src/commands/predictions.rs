use anyhow::Result;
use chrono::Local;

use crate::commands::games::{matchup_line, CARD_INNER_WIDTH};
use crate::config::Config;
use crate::data_provider::WeekDataProvider;
use crate::formatting::{card_border, card_line, format_header};
use crate::loader::WeekData;
use crate::predictions::Accuracy;
use crate::types::GameResult;

fn format_result_card(day: &str, result: &GameResult, config: &Config) -> String {
    let chars = config.display.box_chars();
    let (mark, verdict) = if result.correct {
        (chars.check, "Correct")
    } else {
        (chars.cross, "Incorrect")
    };
    let played = match &result.date {
        Some(date) => format!("{} ({})", day, date),
        None => day.to_string(),
    };

    let mut lines = vec![
        card_border(chars.top_left, chars.top_right, chars.horizontal, CARD_INNER_WIDTH),
        card_line(
            &matchup_line(&result.home_team.name, &result.away_team.name),
            CARD_INNER_WIDTH,
            &chars,
        ),
        card_border(chars.left_junction, chars.right_junction, chars.horizontal, CARD_INNER_WIDTH),
    ];
    for text in [
        played,
        format!("Prediction: {}", result.prediction),
        format!("Actual: {}", result.actual),
        format!("{} {}", mark, verdict),
    ] {
        lines.push(card_line(&text, CARD_INNER_WIDTH, &chars));
    }
    lines.push(card_border(chars.bottom_left, chars.bottom_right, chars.horizontal, CARD_INNER_WIDTH));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Last week's graded predictions with an accuracy summary
pub fn format_last_week(results: &[(String, GameResult)], accuracy: Accuracy, config: &Config) -> String {
    let mut output = format_header("Last Week's Predictions", true, &config.display);
    output.push_str(&format!("\nAccuracy: {}\n\n", accuracy));

    if results.is_empty() {
        output.push_str("No graded predictions for last week.\n");
        return output;
    }

    for (i, (day, result)) in results.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_result_card(day, result, config));
    }
    output
}

pub async fn run(client: &dyn WeekDataProvider, config: &Config) -> Result<()> {
    let data = WeekData::load(client).await;
    let today = Local::now().date_naive();
    let results = data.last_week_results(today);
    println!();
    print!("{}", format_last_week(&results, data.last_week_accuracy(today), config));
    Ok(())
}
