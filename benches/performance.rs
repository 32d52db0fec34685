use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nba::config::Config;
use nba::fixtures::{create_busy_day, create_game, sample_week};
use nba::tui::action::Action;
use nba::tui::reducer::reduce;
use nba::tui::state::AppState;
use nba::types::DayMap;
use nba::week::{compute_week_dates, games_for_day, parse_game_time, resolve_day_label};

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 19).unwrap()
}

/// A day with many games in shuffled time order
fn create_crowded_dataset() -> DayMap<nba::types::Game> {
    let times = ["8:00p", "TBD", "12:30p", "7:00p", "10:30p", "1:05p", "9:15p", "6:00p"];
    let games = (0..120)
        .map(|i| create_game(i, "Lakers", "Warriors", Some(times[i as usize % times.len()])))
        .collect();
    let mut dataset = DayMap::new();
    dataset.insert("Saturday".to_string(), games);
    dataset.insert("Sunday".to_string(), create_busy_day());
    dataset
}

fn bench_resolver(c: &mut Criterion) {
    let today = bench_date();
    let dataset = create_crowded_dataset();
    let dates = compute_week_dates(None, today);
    let labels = nba::week::day_labels(&dates);

    let mut group = c.benchmark_group("resolver");

    group.bench_function("compute_week_dates", |b| {
        b.iter(|| compute_week_dates(black_box(None), black_box(today)))
    });

    group.bench_function("resolve_day_label", |b| {
        b.iter(|| resolve_day_label(black_box(&today), &dates, &labels).map(str::len))
    });

    group.bench_function("parse_game_time", |b| {
        b.iter(|| {
            ["7:30p", "12:00a", "TBD", "11:59p"]
                .iter()
                .filter_map(|t| parse_game_time(black_box(t)))
                .sum::<u32>()
        })
    });

    group.bench_function("games_for_day_120", |b| {
        b.iter(|| games_for_day(black_box(&dataset), black_box("Saturday")))
    });

    group.bench_function("games_for_day_busy", |b| {
        b.iter(|| games_for_day(black_box(&dataset), black_box("Sunday")))
    });

    group.finish();
}

fn bench_reducer_dispatch(c: &mut Criterion) {
    let today = bench_date();
    let mut state = AppState::new(Config::default(), today);
    state.data.apply(Ok(sample_week(today - chrono::Duration::days(3))), "bench");

    let mut group = c.benchmark_group("reducer");

    group.bench_function("select_next_day", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::SelectNextDay));
            new_state
        })
    });

    group.bench_function("week_loaded", |b| {
        let doc = sample_week(today - chrono::Duration::days(3));
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::WeekLoaded(Ok(doc.clone()))),
            );
            new_state
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolver, bench_reducer_dispatch);
criterion_main!(benches);
