/// Sample week data
///
/// Used by the sample provider (no data source configured), by tests, and by
/// the benchmarks. Matchups are the ones the games page has always shown while
/// no real schedule is wired up.
use chrono::{Duration, NaiveDate};

use crate::types::{
    DayMap, Game, GameResult, GameStatus, Prediction, TeamRef, WeekDocument, WeekMetadata,
};
use crate::week::{self, DAYS_IN_WEEK};

/// (home, away, time, venue, predicted winner, confidence)
const UPCOMING: [(&str, &str, &str, &str, &str, f64); DAYS_IN_WEEK] = [
    ("Lakers", "Warriors", "7:30p", "Crypto.com Arena", "Lakers", 58.0),
    ("Celtics", "Heat", "6:00p", "TD Garden", "Celtics", 71.0),
    ("Bulls", "Bucks", "8:00p", "United Center", "Bucks", 64.0),
    ("Nets", "Knicks", "7:30p", "Barclays Center", "Knicks", 55.0),
    ("Suns", "Clippers", "10:00p", "Footprint Center", "Suns", 52.0),
    ("Mavericks", "Rockets", "8:30p", "American Airlines Center", "Mavericks", 60.0),
    ("Trail Blazers", "Jazz", "9:00p", "Moda Center", "Jazz", 51.0),
];

/// (home, away, predicted, actual)
const LAST_WEEK: [(&str, &str, &str, &str); DAYS_IN_WEEK] = [
    ("Lakers", "Warriors", "Lakers Win", "Lakers Win"),
    ("Celtics", "Heat", "Celtics Win", "Heat Win"),
    ("Bulls", "Bucks", "Bucks Win", "Bucks Win"),
    ("Nets", "Knicks", "Nets Win", "Nets Win"),
    ("Suns", "Clippers", "Suns Win", "Clippers Win"),
    ("Mavericks", "Rockets", "Mavericks Win", "Mavericks Win"),
    ("Trail Blazers", "Jazz", "Jazz Win", "Trail Blazers Win"),
];

fn team(name: &str) -> TeamRef {
    let info = crate::teams::team_info(name);
    TeamRef {
        name: name.to_string(),
        abbreviation: info.map(|t| t.abbrev.to_string()),
        city: info.map(|t| t.city.to_string()),
        logo: None,
    }
}

/// Create a single scheduled game
pub fn create_game(id: u32, home: &str, away: &str, time: Option<&str>) -> Game {
    Game {
        id,
        home_team: team(home),
        away_team: team(away),
        time: time.map(str::to_string),
        venue: None,
        date: None,
        prediction: None,
        game_status: GameStatus::Scheduled,
    }
}

/// One game per day starting at `start`, plus last week's graded predictions
pub fn sample_week(start: NaiveDate) -> WeekDocument {
    let dates = week::compute_week_dates(Some(start), start);
    let labels = week::day_labels(&dates);

    let mut current_week = DayMap::new();
    for (i, (home, away, time, venue, winner, confidence)) in UPCOMING.iter().enumerate() {
        let mut game = create_game(i as u32 + 1, home, away, Some(*time));
        game.venue = Some(venue.to_string());
        game.date = Some(dates[i].to_string());
        game.prediction = Some(Prediction {
            winner: winner.to_string(),
            confidence: *confidence,
            spread: None,
            over_under: None,
        });
        current_week.insert(labels[i].clone(), vec![game]);
    }

    let mut last_week = DayMap::new();
    for (i, (home, away, predicted, actual)) in LAST_WEEK.iter().enumerate() {
        let played = dates[i] - Duration::days(DAYS_IN_WEEK as i64);
        let result = GameResult {
            id: i as u32 + 1,
            home_team: team(home),
            away_team: team(away),
            date: Some(played.to_string()),
            prediction: predicted.to_string(),
            actual: actual.to_string(),
            correct: predicted == actual,
        };
        last_week.insert(labels[i].clone(), vec![result]);
    }

    WeekDocument {
        metadata: WeekMetadata {
            week_start_date: Some(dates[0]),
            week_end_date: Some(dates[DAYS_IN_WEEK - 1]),
            last_updated: None,
            total_games: Some(UPCOMING.len()),
            data_source: Some("Built-in sample".to_string()),
            version: Some("1.0".to_string()),
        },
        week_dates: Some(dates.to_vec()),
        ordered_days: Some(labels),
        current_week,
        last_week,
    }
}

/// A busy day with unsorted and unknown start times
pub fn create_busy_day() -> Vec<Game> {
    vec![
        create_game(1, "Knicks", "Celtics", Some("8:00p")),
        create_game(2, "Hawks", "Magic", Some("TBD")),
        create_game(3, "Raptors", "Pistons", Some("7:00p")),
        create_game(4, "Nuggets", "Thunder", Some("10:30p")),
        create_game(5, "Spurs", "Kings", None),
        create_game(6, "Hornets", "Wizards", Some("12:00p")),
        create_game(7, "Pacers", "Cavaliers", Some("7:30p")),
    ]
}
