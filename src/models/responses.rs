use serde::{Deserialize, Serialize};

use super::SearchResult;
use crate::config::FacebookSearchMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            status: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            status: None,
        }
    }

    /// Error relayed from an upstream provider, keeping its status and body.
    pub fn upstream(error: impl Into<String>, details: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            status: Some(status),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub twitter: bool,
    pub facebook: bool,
    pub google_news: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub providers: ProviderStatus,
    pub facebook_mode: FacebookSearchMode,
    pub uptime_seconds: u64,
    pub version: String,
}
