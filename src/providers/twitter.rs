//! Twitter API v2 recent search.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::{read_json, ProviderError, SearchProvider};
use crate::config::TwitterSettings;
use crate::models::{ProviderKind, SearchResult};

const TWEET_FIELDS: &str = "created_at,author_id,public_metrics";
const USER_FIELDS: &str = "username,name";

pub struct TwitterProvider {
    settings: TwitterSettings,
    client: Client,
}

impl TwitterProvider {
    pub fn new(settings: TwitterSettings, client: Client) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl SearchProvider for TwitterProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Twitter
    }

    fn is_configured(&self) -> bool {
        self.settings.bearer_token.is_some()
    }

    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let token = self
            .settings
            .bearer_token
            .as_deref()
            .ok_or(ProviderError::NotConfigured {
                provider: ProviderKind::Twitter,
            })?;

        info!("Searching Twitter for keyword: {}", keyword);

        let max_results = self.settings.max_results.to_string();
        let response = self
            .client
            .get(&self.settings.api_url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&[
                ("query", keyword),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
                ("expansions", "author_id"),
                ("user.fields", USER_FIELDS),
            ])
            .send()
            .await?;

        let payload: RecentSearchResponse = read_json(ProviderKind::Twitter, response).await?;
        Ok(payload.into_results())
    }
}

#[derive(Debug, Default, Deserialize)]
struct RecentSearchResponse {
    #[serde(default)]
    data: Option<Vec<Tweet>>,
    #[serde(default)]
    includes: Option<Includes>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
    author_id: Option<String>,
    created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Includes {
    #[serde(default)]
    users: Vec<TwitterUser>,
}

#[derive(Debug, Deserialize)]
struct TwitterUser {
    id: String,
    username: Option<String>,
    name: Option<String>,
}

impl RecentSearchResponse {
    fn into_results(self) -> Vec<SearchResult> {
        let users = self.includes.map(|i| i.users).unwrap_or_default();

        self.data
            .unwrap_or_default()
            .into_iter()
            .map(|tweet| {
                let author = tweet
                    .author_id
                    .as_deref()
                    .and_then(|author_id| users.iter().find(|u| u.id == author_id));
                let username = author.and_then(|u| u.username.as_deref());

                let link = match username {
                    Some(username) => format!("https://twitter.com/{}/status/{}", username, tweet.id),
                    None => format!("https://twitter.com/i/web/status/{}", tweet.id),
                };

                SearchResult {
                    title: format!("@{}", username.unwrap_or("unknown")),
                    snippet: tweet.text,
                    link,
                    source: ProviderKind::Twitter,
                    date: tweet.created_at,
                    author: Some(
                        author
                            .and_then(|u| u.name.clone())
                            .unwrap_or_else(|| "Unknown".to_string()),
                    ),
                }
            })
            .collect()
    }
}
