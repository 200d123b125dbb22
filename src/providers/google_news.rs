//! Google Custom Search, narrowed to news by suffixing the query.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::{now_timestamp, read_json, ProviderError, SearchProvider};
use crate::config::GoogleSettings;
use crate::models::{ProviderKind, SearchResult};

pub struct GoogleNewsProvider {
    settings: GoogleSettings,
    client: Client,
}

impl GoogleNewsProvider {
    pub fn new(settings: GoogleSettings, client: Client) -> Self {
        Self { settings, client }
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        Some((
            self.settings.api_key.as_deref()?,
            self.settings.search_engine_id.as_deref()?,
        ))
    }
}

#[async_trait]
impl SearchProvider for GoogleNewsProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::GoogleNews
    }

    fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let (api_key, engine_id) = self.credentials().ok_or(ProviderError::NotConfigured {
            provider: ProviderKind::GoogleNews,
        })?;

        info!("Searching Google News for keyword: {}", keyword);

        let query = format!("{} news", keyword);
        let num = self.settings.num_results.to_string();
        let response = self
            .client
            .get(&self.settings.api_url)
            .query(&[
                ("key", api_key),
                ("cx", engine_id),
                ("q", query.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let payload: CustomSearchResponse = read_json(ProviderKind::GoogleNews, response).await?;
        Ok(payload.into_results())
    }
}

#[derive(Debug, Default, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: String,
    #[serde(default)]
    snippet: String,
    link: String,
}

impl CustomSearchResponse {
    fn into_results(self) -> Vec<SearchResult> {
        let date = now_timestamp();
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                snippet: item.snippet,
                link: item.link,
                source: ProviderKind::GoogleNews,
                date: Some(date.clone()),
                author: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{web, App, HttpResponse};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SEARCH_PATH: &str = "/customsearch/v1";

    async fn fake_custom_search(
        query: web::Query<HashMap<String, String>>,
        hits: web::Data<AtomicUsize>,
    ) -> HttpResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        if query.get("key").map(String::as_str) != Some("google-key") {
            return HttpResponse::Forbidden().body("API key not valid");
        }
        if query.get("cx").map(String::as_str) != Some("engine-1")
            || query.get("q").map(String::as_str) != Some("rust async news")
            || query.get("num").map(String::as_str) != Some("10")
        {
            return HttpResponse::BadRequest().body("unexpected query");
        }

        HttpResponse::Ok().json(json!({
            "kind": "customsearch#search",
            "items": [
                {
                    "title": "Async Rust ships",
                    "snippet": "The async working group announced...",
                    "link": "https://news.example.com/async-rust"
                },
                {
                    "title": "Tokio 2.0?",
                    "snippet": "Rumours abound.",
                    "link": "https://news.example.com/tokio"
                }
            ]
        }))
    }

    fn settings(api_url: String, api_key: Option<&str>, engine: Option<&str>) -> GoogleSettings {
        GoogleSettings {
            api_key: api_key.map(str::to_string),
            search_engine_id: engine.map(str::to_string),
            api_url,
            ..Config::default().google
        }
    }

    fn start_fake(hits: Arc<AtomicUsize>) -> actix_test::TestServer {
        actix_test::start(move || {
            App::new()
                .app_data(web::Data::from(hits.clone()))
                .route(SEARCH_PATH, web::get().to(fake_custom_search))
        })
    }

    #[test]
    fn test_missing_items_means_no_results() {
        let payload: CustomSearchResponse =
            serde_json::from_value(json!({ "kind": "customsearch#search" })).unwrap();
        assert!(payload.into_results().is_empty());
    }

    #[actix_rt::test]
    async fn test_search_against_fake_api() {
        let hits = Arc::new(AtomicUsize::new(0));
        let srv = start_fake(hits.clone());
        let provider = GoogleNewsProvider::new(
            settings(srv.url(SEARCH_PATH), Some("google-key"), Some("engine-1")),
            Client::new(),
        );

        let results = provider.search("rust async").await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(!result.title.is_empty());
            assert!(!result.snippet.is_empty());
            assert!(!result.link.is_empty());
            assert_eq!(result.source, ProviderKind::GoogleNews);
            assert!(result.date.is_some());
        }
    }

    #[actix_rt::test]
    async fn test_upstream_error_is_propagated_verbatim() {
        let hits = Arc::new(AtomicUsize::new(0));
        let srv = start_fake(hits.clone());
        let provider = GoogleNewsProvider::new(
            settings(srv.url(SEARCH_PATH), Some("bad-key"), Some("engine-1")),
            Client::new(),
        );

        match provider.search("rust async").await {
            Err(ProviderError::Upstream { status, body, .. }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_both_credentials_are_required() {
        let hits = Arc::new(AtomicUsize::new(0));
        let srv = start_fake(hits.clone());

        for (key, engine) in [(Some("google-key"), None), (None, Some("engine-1"))] {
            let provider =
                GoogleNewsProvider::new(settings(srv.url(SEARCH_PATH), key, engine), Client::new());
            assert!(!provider.is_configured());
            assert!(matches!(
                provider.search("rust async").await,
                Err(ProviderError::NotConfigured { .. })
            ));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[actix_rt::test]
    async fn test_malformed_payload_is_a_decode_error() {
        let srv = actix_test::start(|| {
            App::new().route(
                SEARCH_PATH,
                web::get().to(|| async { HttpResponse::Ok().body("<html>not json</html>") }),
            )
        });
        let provider = GoogleNewsProvider::new(
            settings(srv.url(SEARCH_PATH), Some("google-key"), Some("engine-1")),
            Client::new(),
        );

        assert!(matches!(
            provider.search("rust").await,
            Err(ProviderError::Decode { .. })
        ));
    }

    #[actix_rt::test]
    async fn test_unreachable_api_error_omits_key() {
        let provider = GoogleNewsProvider::new(
            settings(
                "http://127.0.0.1:1/customsearch/v1".to_string(),
                Some("secret-google-key"),
                Some("engine-1"),
            ),
            Client::new(),
        );

        let err = provider.search("rust").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
        assert!(!err.to_string().contains("secret-google-key"));
        assert!(!format!("{:?}", err).contains("secret-google-key"));
    }
}
