use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{ResultBucket, SearchReport};
use crate::providers::{ProviderSet, SearchProvider};
use crate::utils::Keywords;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No keywords found. Please enter more meaningful text.")]
    NoKeywords,
}

/// Extracts keywords and fans them out to every provider at once.
///
/// Holds the most recent report. A new search clears it on start and replaces
/// it on completion; overlapping searches are not coordinated, so the last one
/// to finish wins.
#[derive(Clone)]
pub struct SearchService {
    providers: ProviderSet,
    latest: Arc<RwLock<Option<SearchReport>>>,
}

impl SearchService {
    pub fn new(providers: ProviderSet) -> Self {
        Self {
            providers,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    pub async fn search_keywords(&self, keywords: Keywords) -> Result<SearchReport, SearchError> {
        if keywords.is_empty() {
            return Err(SearchError::NoKeywords);
        }

        self.latest.write().await.take();

        let query = keywords.query();
        debug!(keywords = ?keywords.as_slice(), "Fanning out search to all providers");
        let (twitter, facebook, google_news) = futures::future::join3(
            fetch_bucket(self.providers.twitter.clone(), query.clone()),
            fetch_bucket(self.providers.facebook.clone(), query.clone()),
            fetch_bucket(self.providers.google_news.clone(), query.clone()),
        )
        .await;

        let report = SearchReport {
            keywords: keywords.into_vec(),
            query,
            twitter,
            facebook,
            google_news,
            searched_at: Utc::now(),
        };

        info!(
            query = %report.query,
            twitter = report.twitter.len(),
            facebook = report.facebook.len(),
            google_news = report.google_news.len(),
            total = report.total_results(),
            "Search complete"
        );

        *self.latest.write().await = Some(report.clone());
        Ok(report)
    }

    pub async fn latest(&self) -> Option<SearchReport> {
        self.latest.read().await.clone()
    }
}

/// Runs one provider on its own task. Any failure, including a panic inside
/// the provider, becomes an empty bucket.
async fn fetch_bucket(provider: Arc<dyn SearchProvider>, query: String) -> ResultBucket {
    let kind = provider.kind();
    let task = tokio::spawn(async move { provider.search(&query).await });

    match task.await {
        Ok(Ok(results)) => results,
        Ok(Err(e)) => {
            warn!(provider = %kind, error = %e, "Provider search failed, bucket left empty");
            Vec::new()
        }
        Err(e) => {
            warn!(provider = %kind, error = %e, "Provider task did not complete, bucket left empty");
            Vec::new()
        }
    }
}
