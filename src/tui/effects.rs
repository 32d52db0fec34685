use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::cache;
use crate::data_provider::WeekDataProvider;

/// Side effect returned by the reducer
pub enum Effect {
    None,
    /// Fetch the week document; `force` bypasses the cache
    FetchWeek { force: bool },
    /// Run a future that resolves to an action
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::FetchWeek { force } => write!(f, "FetchWeek {{ force: {} }}", force),
            Effect::Async(_) => write!(f, "Async(..)"),
        }
    }
}

/// Effect handler for data fetching
///
/// Each method returns an `Effect::Async` that dispatches `WeekLoaded` when done.
pub struct DataEffects {
    client: Arc<dyn WeekDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn WeekDataProvider>) -> Self {
        Self { client }
    }

    pub fn source(&self) -> String {
        self.client.describe()
    }

    /// One-shot fetch of the week document (with caching)
    pub fn fetch_week(&self, force: bool) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = if force {
                cache::refresh_week(client.as_ref()).await
            } else {
                cache::fetch_week_cached(client.as_ref()).await
            };
            Action::WeekLoaded(result.map_err(|e| e.to_string()))
        }))
    }
}
