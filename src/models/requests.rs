use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the per-provider search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

impl KeywordQuery {
    /// The trimmed keyword, or `None` when it is absent or blank.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractRequest {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,
}

/// Body of `POST /api/search`. Either free text to extract keywords from, or
/// an explicit working set of keywords the client has already curated.
/// `exclude` drops keywords the user removed after extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 20000))]
    pub text: Option<String>,
    #[validate(length(min = 1, max = 5))]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
}
