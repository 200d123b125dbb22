//! Content-search providers.
//!
//! Each provider wraps one vendor API and reshapes its payload into
//! [`SearchResult`]s. Providers are stateless apart from their injected
//! settings and a shared HTTP client.

pub mod facebook;
pub mod google_news;
pub mod twitter;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, UpstreamConfig};
use crate::models::{ProviderKind, SearchResult};

pub use facebook::FacebookProvider;
pub use google_news::GoogleNewsProvider;
pub use twitter::TwitterProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Required credentials are missing. No request was sent.
    #[error("{provider} API not configured")]
    NotConfigured { provider: ProviderKind },

    /// The vendor answered with a non-success status.
    #[error("{provider} API error: {status} - {body}")]
    Upstream {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    /// Transport failure. Holds the error with its request URL stripped, so
    /// query-string credentials never reach messages or logs.
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("Malformed {provider} response: {message}")]
    Decode {
        provider: ProviderKind,
        message: String,
    },
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Request(e.without_url())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the credentials this provider needs are present.
    fn is_configured(&self) -> bool;

    /// Runs one search for `keyword`. Exactly one outbound request is made,
    /// or none when the provider is not configured.
    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>, ProviderError>;
}

/// One provider per content source.
#[derive(Clone)]
pub struct ProviderSet {
    pub twitter: Arc<dyn SearchProvider>,
    pub facebook: Arc<dyn SearchProvider>,
    pub google_news: Arc<dyn SearchProvider>,
}

impl ProviderSet {
    pub fn from_config(config: &Config, client: Client) -> Self {
        Self {
            twitter: Arc::new(TwitterProvider::new(config.twitter.clone(), client.clone())),
            facebook: Arc::new(FacebookProvider::new(config.facebook.clone(), client.clone())),
            google_news: Arc::new(GoogleNewsProvider::new(config.google.clone(), client)),
        }
    }

    pub fn get(&self, kind: ProviderKind) -> &Arc<dyn SearchProvider> {
        match kind {
            ProviderKind::Twitter => &self.twitter,
            ProviderKind::Facebook => &self.facebook,
            ProviderKind::GoogleNews => &self.google_news,
        }
    }
}

pub fn build_client(config: &UpstreamConfig) -> anyhow::Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Current time in the same format vendors use for their own timestamps.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Checks the status, then decodes the body. A non-success status is returned
/// as [`ProviderError::Upstream`] with the body untouched.
pub(crate) async fn read_json<T: DeserializeOwned>(
    provider: ProviderKind,
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    provider = %provider,
                    status = status.as_u16(),
                    error = %e.without_url(),
                    "Failed to read upstream error body"
                );
                String::new()
            }
        };
        return Err(ProviderError::Upstream {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    debug!(provider = %provider, bytes = body.len(), "Upstream response received");

    serde_json::from_str(&body).map_err(|e| ProviderError::Decode {
        provider,
        message: e.to_string(),
    })
}
