use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Runtime - owns the state and turns actions into effects
///
/// The Runtime is responsible for:
/// - Dispatching actions through the reducer
/// - Executing side effects on spawned tasks
/// - Feeding effect results back as actions
pub struct Runtime {
    state: AppState,

    action_rx: mpsc::UnboundedReceiver<Action>,

    effect_tx: mpsc::UnboundedSender<Effect>,

    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime; must be called inside a tokio runtime
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchWeek { force } => {
                debug!(
                    "EFFECT: Fetching week from {} (force={})",
                    self.data_effects.source(),
                    force
                );
                let fetch_effect = self.data_effects.fetch_week(force);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Converted to Effect::Async by execute_effect() before queueing
            Effect::FetchWeek { .. } => {
                tracing::warn!("Fetch effect reached async executor without being converted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data_provider::{SampleProvider, WeekDataProvider};
    use crate::error::{DataError, Result};
    use crate::tui::types::Route;
    use crate::types::WeekDocument;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct BrokenProvider;

    #[async_trait]
    impl WeekDataProvider for BrokenProvider {
        async fn fetch_week(&self) -> Result<WeekDocument> {
            Err(DataError::Status {
                status: 503,
                url: "http://localhost/broken".to_string(),
            })
        }

        fn describe(&self) -> String {
            "broken:runtime-test".to_string()
        }
    }

    fn initial_state() -> AppState {
        AppState::new(Config::default(), NaiveDate::from_ymd_opt(2024, 12, 19).unwrap())
    }

    fn create_test_runtime(provider: Arc<dyn WeekDataProvider>) -> Runtime {
        Runtime::new(initial_state(), Arc::new(DataEffects::new(provider)))
    }

    /// Poll the action queue until the week fetch has landed
    async fn wait_for_load(runtime: &mut Runtime) {
        for _ in 0..50 {
            runtime.process_actions();
            if !runtime.state().data.loading {
                return;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }
        panic!("week never loaded");
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let mut runtime = create_test_runtime(Arc::new(SampleProvider));
        runtime.dispatch(Action::Navigate(Route::Games));
        assert_eq!(runtime.state().navigation.route, Route::Games);
    }

    #[tokio::test]
    async fn test_effect_execution() {
        use std::sync::Mutex;

        let mut runtime = create_test_runtime(Arc::new(SampleProvider));
        let executed = Arc::new(Mutex::new(false));
        let executed_clone = executed.clone();

        let effect = Effect::Async(Box::pin(async move {
            *executed_clone.lock().unwrap() = true;
            Action::ToggleViewMode
        }));
        runtime.effect_tx.send(effect).unwrap();

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        assert_eq!(runtime.process_actions(), 1);

        assert!(*executed.lock().unwrap());
        assert_eq!(
            runtime.state().games.view_mode,
            crate::tui::types::ViewMode::LastWeek
        );
    }

    #[tokio::test]
    async fn test_refresh_loads_sample_week() {
        let mut runtime = create_test_runtime(Arc::new(SampleProvider));
        runtime.dispatch(Action::RefreshData);
        assert!(runtime.state().data.loading);

        wait_for_load(&mut runtime).await;

        let state = runtime.state();
        assert!(state.data.document.is_some());
        assert_eq!(state.data.total_games(), 7);
        assert!(state.data.error.is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_leaves_week_empty() {
        let mut runtime = create_test_runtime(Arc::new(BrokenProvider));
        runtime.dispatch(Action::RefreshData);

        wait_for_load(&mut runtime).await;

        let state = runtime.state();
        assert!(!state.data.loading);
        assert!(state.data.current_week_is_empty());
        assert!(state.data.error.is_some());
        // The week still renders seven days
        assert_eq!(state.day_labels().len(), 7);
    }
}
