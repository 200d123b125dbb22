use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three content sources a keyword search fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    Twitter,
    Facebook,
    #[serde(rename = "Google News")]
    GoogleNews,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Twitter => "Twitter",
            ProviderKind::Facebook => "Facebook",
            ProviderKind::GoogleNews => "Google News",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized hit from one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub source: ProviderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

pub type ResultBucket = Vec<SearchResult>;

/// Outcome of one aggregated search. Each bucket holds one provider's results,
/// empty when that provider failed or matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub keywords: Vec<String>,
    pub query: String,
    pub twitter: ResultBucket,
    pub facebook: ResultBucket,
    pub google_news: ResultBucket,
    pub searched_at: DateTime<Utc>,
}

impl SearchReport {
    pub fn total_results(&self) -> usize {
        self.twitter.len() + self.facebook.len() + self.google_news.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tags_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_value(ProviderKind::GoogleNews).unwrap(),
            serde_json::json!("Google News")
        );
        assert_eq!(
            serde_json::to_value(ProviderKind::Twitter).unwrap(),
            serde_json::json!("Twitter")
        );
        assert_eq!(ProviderKind::Facebook.to_string(), "Facebook");
    }

    #[test]
    fn test_search_result_omits_missing_optionals() {
        let result = SearchResult {
            title: "Title".to_string(),
            snippet: "Snippet".to_string(),
            link: "https://example.com".to_string(),
            source: ProviderKind::GoogleNews,
            date: None,
            author: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"], "Google News");
        assert!(json.get("date").is_none());
        assert!(json.get("author").is_none());
    }
}
