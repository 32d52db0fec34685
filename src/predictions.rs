use crate::types::{DayMap, GameResult};

/// Graded prediction count for a set of finished games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    /// Percentage rounded to the nearest integer, 0 when nothing was graded
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.percent())
    }
}

pub fn accuracy<'a, I>(results: I) -> Accuracy
where
    I: IntoIterator<Item = &'a GameResult>,
{
    results.into_iter().fold(Accuracy::default(), |mut acc, r| {
        acc.total += 1;
        if r.correct {
            acc.correct += 1;
        }
        acc
    })
}

/// Last week's results in day order, days missing from `labels` skipped
pub fn results_in_order<'a, S: AsRef<str>>(
    last_week: &'a DayMap<GameResult>,
    labels: &[S],
) -> Vec<(&'a str, &'a GameResult)> {
    labels
        .iter()
        .filter_map(|label| last_week.get_key_value(label.as_ref()))
        .flat_map(|(day, results)| results.iter().map(move |r| (day.as_str(), r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::week::WEEKDAY_LABELS;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_week_accuracy() {
        let doc = fixtures::sample_week(NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
        let acc = accuracy(doc.last_week.values().flatten());
        assert_eq!(acc, Accuracy { correct: 4, total: 7 });
        assert_eq!(acc.percent(), 57);
        assert_eq!(acc.to_string(), "4/7 (57%)");
    }

    #[test]
    fn test_empty_accuracy_is_zero() {
        let acc = accuracy(std::iter::empty());
        assert_eq!(acc.percent(), 0);
        assert_eq!(acc.to_string(), "0/0 (0%)");
    }

    #[test]
    fn test_percent_rounds() {
        assert_eq!(Accuracy { correct: 3, total: 7 }.percent(), 43);
        assert_eq!(Accuracy { correct: 1, total: 8 }.percent(), 13);
        assert_eq!(Accuracy { correct: 2, total: 2 }.percent(), 100);
    }

    #[test]
    fn test_results_follow_label_order() {
        let doc = fixtures::sample_week(NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
        let ordered = results_in_order(&doc.last_week, &WEEKDAY_LABELS);
        let days: Vec<&str> = ordered.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, WEEKDAY_LABELS.to_vec());
        assert_eq!(ordered[0].1.home_team.name, "Lakers");
        assert_eq!(ordered[6].1.home_team.name, "Trail Blazers");
    }
}
