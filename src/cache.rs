use crate::data_provider::WeekDataProvider;
use crate::error::DataError;
use crate::types::WeekDocument;
use cached::proc_macro::cached;

pub use cached::Cached;

/// Seconds a fetched week document stays fresh
pub const WEEK_CACHE_LIFESPAN_SECS: u64 = 300;

#[cfg(test)]
pub async fn clear_all_caches() {
    WEEK_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
pub async fn week_cache_entries() -> usize {
    WEEK_CACHE.lock().await.cache_size()
}

/// Fetch the week document, keyed by the provider's source description
#[cached(
    name = "WEEK_CACHE",
    type = "cached::TimedSizedCache<String, WeekDocument>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(16, WEEK_CACHE_LIFESPAN_SECS) }",
    convert = r#"{ client.describe() }"#,
    result = true
)]
pub async fn fetch_week_cached(client: &dyn WeekDataProvider) -> Result<WeekDocument, DataError> {
    client.fetch_week().await
}

/// Drop the cached document for this provider and fetch again
pub async fn refresh_week(client: &dyn WeekDataProvider) -> Result<WeekDocument, DataError> {
    WEEK_CACHE.lock().await.cache_remove(&client.describe());
    fetch_week_cached(client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches; each instance uses its own cache key
    struct CountingProvider {
        key: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeekDataProvider for CountingProvider {
        async fn fetch_week(&self) -> Result<WeekDocument> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(WeekDocument::default())
        }

        fn describe(&self) -> String {
            format!("counting:{}", self.key)
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl WeekDataProvider for FailingProvider {
        async fn fetch_week(&self) -> Result<WeekDocument> {
            Err(DataError::Status { status: 503, url: "cache-test".to_string() })
        }

        fn describe(&self) -> String {
            "failing:cache-test".to_string()
        }
    }

    #[tokio::test]
    async fn test_second_fetch_hits_cache() {
        let client = CountingProvider { key: "hit", calls: AtomicUsize::new(0) };
        fetch_week_cached(&client).await.unwrap();
        fetch_week_cached(&client).await.unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let client = CountingProvider { key: "refresh", calls: AtomicUsize::new(0) };
        fetch_week_cached(&client).await.unwrap();
        refresh_week(&client).await.unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        assert!(fetch_week_cached(&FailingProvider).await.is_err());
        assert!(fetch_week_cached(&FailingProvider).await.is_err());
        let mut cache = WEEK_CACHE.lock().await;
        assert!(cache.cache_get(&"failing:cache-test".to_string()).is_none());
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_clear_all_caches() {
        let client = CountingProvider { key: "clear", calls: AtomicUsize::new(0) };
        fetch_week_cached(&client).await.unwrap();
        assert!(week_cache_entries().await > 0);
        clear_all_caches().await;
        assert_eq!(week_cache_entries().await, 0);
    }
}
