/// Loaded week data plus the glue between the document and the resolver
use chrono::NaiveDate;
use tracing::{debug, error};

use crate::cache;
use crate::data_provider::WeekDataProvider;
use crate::predictions::{self, Accuracy};
use crate::types::{Game, GameResult, WeekDocument};
use crate::week::{self, DAYS_IN_WEEK};

/// State of the one-shot week fetch
///
/// Before the fetch completes (or when it fails) there is no document and the
/// games view falls back to the locally computed current week with no games.
#[derive(Debug, Clone, Default)]
pub struct WeekData {
    pub loading: bool,
    pub document: Option<WeekDocument>,
    pub error: Option<String>,
}

impl WeekData {
    /// State while the first fetch is in flight
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Fetch through the cache; failures are logged and leave the data empty
    pub async fn load(provider: &dyn WeekDataProvider) -> Self {
        let mut data = Self::pending();
        let result = cache::fetch_week_cached(provider).await;
        data.apply(result.map_err(|e| e.to_string()), &provider.describe());
        data
    }

    /// Record the outcome of a fetch
    ///
    /// A failure keeps whatever document was there before (none on first load)
    /// and never propagates to the caller.
    pub fn apply(&mut self, result: Result<WeekDocument, String>, source: &str) {
        self.loading = false;
        match result {
            Ok(document) => {
                debug!(
                    "Loaded week starting {:?} from {}",
                    document.metadata.week_start_date, source
                );
                self.document = Some(document);
                self.error = None;
            }
            Err(e) => {
                error!("Error loading week data from {}: {}", source, e);
                self.error = Some(e);
            }
        }
    }

    /// First day of the document's week, if it names one
    pub fn week_start(&self) -> Option<NaiveDate> {
        let doc = self.document.as_ref()?;
        doc.metadata
            .week_start_date
            .or_else(|| doc.week_dates.as_ref().and_then(|d| d.first().copied()))
    }

    /// The seven displayed dates: the document's week, else the fallback week around `today`
    pub fn week_dates(&self, today: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
        week::compute_week_dates(self.week_start(), today)
    }

    /// Day labels parallel to `week_dates`
    ///
    /// Uses the document's `orderedDays` when it has exactly seven entries.
    pub fn ordered_days(&self, week_dates: &[NaiveDate]) -> Vec<String> {
        match self.document.as_ref().and_then(|d| d.ordered_days.as_ref()) {
            Some(days) if days.len() == DAYS_IN_WEEK => days.clone(),
            _ => week::day_labels(week_dates),
        }
    }

    /// Label of the day bucket to show for `selected`
    pub fn label_for(&self, selected: NaiveDate, today: NaiveDate) -> String {
        let dates = self.week_dates(today);
        let labels = self.ordered_days(&dates);
        week::resolve_day_label(&selected, &dates, &labels)
            .unwrap_or(week::WEEKDAY_LABELS[0])
            .to_string()
    }

    /// Games for a day label in start-time order
    pub fn games_for(&self, label: &str) -> Vec<Game> {
        match &self.document {
            Some(doc) => week::games_for_day(&doc.current_week, label),
            None => Vec::new(),
        }
    }

    /// Games for a calendar date in start-time order
    pub fn games_on(&self, selected: NaiveDate, today: NaiveDate) -> Vec<Game> {
        self.games_for(&self.label_for(selected, today))
    }

    pub fn current_week_is_empty(&self) -> bool {
        self.total_games() == 0
    }

    pub fn total_games(&self) -> usize {
        self.document
            .as_ref()
            .map(|d| d.current_week.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Last week's graded predictions in display order
    pub fn last_week_results(&self, today: NaiveDate) -> Vec<(String, GameResult)> {
        let Some(doc) = &self.document else {
            return Vec::new();
        };
        let dates = self.week_dates(today);
        let labels = self.ordered_days(&dates);
        predictions::results_in_order(&doc.last_week, &labels)
            .into_iter()
            .map(|(day, r)| (day.to_string(), r.clone()))
            .collect()
    }

    /// Accuracy over exactly the results `last_week_results` lists
    pub fn last_week_accuracy(&self, today: NaiveDate) -> Accuracy {
        let results = self.last_week_results(today);
        predictions::accuracy(results.iter().map(|(_, r)| r))
    }
}
