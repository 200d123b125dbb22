//! Facebook public page search.
//!
//! The Graph API only exposes page search to approved apps, so the provider
//! runs in one of two explicitly configured modes. See [`FacebookSearchMode`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::{now_timestamp, read_json, ProviderError, SearchProvider};
use crate::config::{FacebookSearchMode, FacebookSettings};
use crate::models::{ProviderKind, SearchResult};

const PAGE_FIELDS: &str = "id,name,description,link";
const NO_DESCRIPTION: &str = "No description available";

pub struct FacebookProvider {
    settings: FacebookSettings,
    client: Client,
}

impl FacebookProvider {
    pub fn new(settings: FacebookSettings, client: Client) -> Self {
        Self { settings, client }
    }

    fn placeholder(&self, keyword: &str) -> SearchResult {
        SearchResult {
            title: "Facebook Search Limited".to_string(),
            snippet: format!(
                "Facebook's API doesn't support general public post searches. To search Facebook, \
                 you would need page-specific access or use their official website. Searched for: \"{}\"",
                keyword
            ),
            link: format!(
                "{}?q={}",
                self.settings.web_search_url,
                urlencoding::encode(keyword)
            ),
            source: ProviderKind::Facebook,
            date: Some(now_timestamp()),
            author: None,
        }
    }

    async fn search_pages(&self, token: &str, keyword: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let response = self
            .client
            .get(&self.settings.graph_url)
            .query(&[
                ("q", keyword),
                ("fields", PAGE_FIELDS),
                ("access_token", token),
            ])
            .send()
            .await?;

        let payload: PageSearchResponse = read_json(ProviderKind::Facebook, response).await?;
        Ok(payload.into_results())
    }
}

#[async_trait]
impl SearchProvider for FacebookProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Facebook
    }

    fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let token = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured {
                provider: ProviderKind::Facebook,
            })?;

        match self.settings.mode {
            FacebookSearchMode::Placeholder => {
                info!(
                    "Facebook public post search unavailable, returning placeholder for keyword: {}",
                    keyword
                );
                Ok(vec![self.placeholder(keyword)])
            }
            FacebookSearchMode::Graph => {
                info!("Searching Facebook pages for keyword: {}", keyword);
                self.search_pages(token, keyword).await
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageSearchResponse {
    #[serde(default)]
    data: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    id: String,
    name: String,
    description: Option<String>,
    link: Option<String>,
}

impl PageSearchResponse {
    fn into_results(self) -> Vec<SearchResult> {
        let date = now_timestamp();
        self.data
            .into_iter()
            .map(|page| SearchResult {
                link: page
                    .link
                    .filter(|link| !link.is_empty())
                    .unwrap_or_else(|| format!("https://www.facebook.com/{}", page.id)),
                title: page.name,
                snippet: page
                    .description
                    .filter(|description| !description.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                source: ProviderKind::Facebook,
                date: Some(date.clone()),
                author: None,
            })
            .collect()
    }
}
