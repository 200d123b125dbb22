use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub twitter: TwitterSettings,
    pub facebook: FacebookSettings,
    pub google: GoogleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Falls back to the HTTP client's own defaults when unset.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterSettings {
    #[serde(skip_serializing)]
    pub bearer_token: Option<String>,
    pub api_url: String,
    pub max_results: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacebookSearchMode {
    /// Answer with a single informational result pointing at facebook.com search.
    Placeholder,
    /// Query the Graph API pages search endpoint.
    Graph,
}

impl std::str::FromStr for FacebookSearchMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "graph" => Ok(Self::Graph),
            other => Err(anyhow::anyhow!(
                "unknown FACEBOOK_SEARCH_MODE '{}', expected 'placeholder' or 'graph'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub mode: FacebookSearchMode,
    pub graph_url: String,
    pub web_search_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    #[serde(skip_serializing)]
    pub search_engine_id: Option<String>,
    pub api_url: String,
    pub num_results: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5732,
                workers: num_cpus::get(),
            },
            upstream: UpstreamConfig::default(),
            twitter: TwitterSettings {
                bearer_token: None,
                api_url: "https://api.twitter.com/2/tweets/search/recent".to_string(),
                max_results: 10,
            },
            facebook: FacebookSettings {
                api_key: None,
                mode: FacebookSearchMode::Placeholder,
                graph_url: "https://graph.facebook.com/v19.0/pages/search".to_string(),
                web_search_url: "https://www.facebook.com/search/posts/".to_string(),
            },
            google: GoogleSettings {
                api_key: None,
                search_engine_id: None,
                api_url: "https://www.googleapis.com/customsearch/v1".to_string(),
                num_results: 10,
            },
        }
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Some(timeout) = non_empty_var("UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = Some(timeout.parse()?);
        }

        // Provider credentials
        config.twitter.bearer_token = non_empty_var("TWITTER_BEARER_TOKEN");
        config.facebook.api_key = non_empty_var("FACEBOOK_API_KEY");
        config.google.api_key = non_empty_var("GOOGLE_API_KEY");
        config.google.search_engine_id = non_empty_var("GOOGLE_SEARCH_ENGINE_ID");

        if let Some(mode) = non_empty_var("FACEBOOK_SEARCH_MODE") {
            config.facebook.mode = mode.parse()?;
        }

        // Endpoint overrides
        if let Some(url) = non_empty_var("TWITTER_API_URL") {
            config.twitter.api_url = url;
        }
        if let Some(url) = non_empty_var("FACEBOOK_GRAPH_URL") {
            config.facebook.graph_url = url;
        }
        if let Some(url) = non_empty_var("FACEBOOK_WEB_SEARCH_URL") {
            config.facebook.web_search_url = url;
        }
        if let Some(url) = non_empty_var("GOOGLE_API_URL") {
            config.google.api_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_credentials() {
        let config = Config::default();
        assert!(config.twitter.bearer_token.is_none());
        assert!(config.facebook.api_key.is_none());
        assert!(config.google.api_key.is_none());
        assert!(config.google.search_engine_id.is_none());
        assert_eq!(config.facebook.mode, FacebookSearchMode::Placeholder);
        assert_eq!(config.twitter.max_results, 10);
    }

    #[test]
    fn test_facebook_mode_parsing() {
        assert_eq!(
            "graph".parse::<FacebookSearchMode>().unwrap(),
            FacebookSearchMode::Graph
        );
        assert_eq!(
            " Placeholder ".parse::<FacebookSearchMode>().unwrap(),
            FacebookSearchMode::Placeholder
        );
        assert!("live".parse::<FacebookSearchMode>().is_err());
    }

    #[test]
    fn test_credentials_are_not_serialized() {
        let mut config = Config::default();
        config.twitter.bearer_token = Some("secret-token".to_string());
        config.google.api_key = Some("secret-key".to_string());

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(!json.contains("secret-key"));
    }
}
