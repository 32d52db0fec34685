/// Sources for the week document, abstracting over HTTP, local files and built-in samples
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DataError, Result};
use crate::fixtures;
use crate::types::WeekDocument;
use crate::week;

/// Trait for week data providers
#[async_trait]
pub trait WeekDataProvider: Send + Sync {
    /// Fetch the whole week document
    async fn fetch_week(&self) -> Result<WeekDocument>;

    /// Short description of where the data comes from (also the cache key)
    fn describe(&self) -> String;
}

/// Single unauthenticated GET of a static JSON document
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WeekDataProvider for HttpProvider {
    async fn fetch_week(&self) -> Result<WeekDocument> {
        debug!("HttpProvider: GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from disk, e.g. the scraper's `upcoming.json`
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WeekDataProvider for FileProvider {
    async fn fetch_week(&self) -> Result<WeekDocument> {
        debug!("FileProvider: reading {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

/// Built-in sample week anchored on the current Monday
pub struct SampleProvider;

#[async_trait]
impl WeekDataProvider for SampleProvider {
    async fn fetch_week(&self) -> Result<WeekDocument> {
        let monday = week::current_week_dates()[0];
        info!("SampleProvider: returning sample week starting {}", monday);
        Ok(fixtures::sample_week(monday))
    }

    fn describe(&self) -> String {
        "sample".to_string()
    }
}

/// Pick a provider: local file first, then URL, then the built-in samples
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn WeekDataProvider>> {
    if let Some(path) = &config.data_file {
        info!("Using week document from file {}", path.display());
        return Ok(Arc::new(FileProvider::new(path.clone())));
    }
    if let Some(url) = &config.data_url {
        info!("Using week document from {}", url);
        return Ok(Arc::new(HttpProvider::new(url.clone(), config.request_timeout())?));
    }
    info!("No data source configured, using sample week");
    Ok(Arc::new(SampleProvider))
}
