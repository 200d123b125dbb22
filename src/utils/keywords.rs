use serde::{Deserialize, Serialize};

pub const MAX_KEYWORDS: usize = 5;
pub const MIN_KEYWORD_CHARS: usize = 4;

pub const STOPWORDS: [&str; 24] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// An ordered, deduplicated working set of at most [`MAX_KEYWORDS`] keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Normalizes a client-supplied working set. Entries are trimmed and
    /// lowercased; blanks and repeats are dropped.
    pub fn from_working_set<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Keywords::default();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() {
                set.push_unique(keyword);
            }
            if set.0.len() == MAX_KEYWORDS {
                break;
            }
        }
        set
    }

    fn push_unique(&mut self, keyword: String) {
        if !self.0.contains(&keyword) {
            self.0.push(keyword);
        }
    }

    /// Drops a keyword from the working set. Returns whether it was present.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|k| k != keyword);
        self.0.len() != before
    }

    /// Space-joined query string sent to every provider.
    pub fn query(&self) -> String {
        self.0.join(" ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts up to [`MAX_KEYWORDS`] keywords from free text, in order of first
/// occurrence.
pub fn extract_keywords(text: &str) -> Keywords {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut keywords = Keywords::default();
    for token in normalized.split_whitespace() {
        if token.chars().count() < MIN_KEYWORD_CHARS || is_stopword(token) {
            continue;
        }
        keywords.push_unique(token.to_string());
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_pangram() {
        let keywords = extract_keywords("The quick brown fox jumps over the lazy dog");
        assert_eq!(
            keywords.as_slice(),
            &["quick", "brown", "jumps", "over", "lazy"]
        );
    }

    #[rstest]
    #[case("", &[])]
    #[case("   \n\t ", &[])]
    #[case("the and with from that will", &[])]
    #[case("a cat on it", &[])]
    #[case("Rust, RUST; rust! Tokio?", &["rust", "tokio"])]
    #[case("e-mail re-use", &["mail"])]
    #[case("rock'n'roll snake_case", &["rock", "roll", "snake", "case"])]
    #[case("Café crème brûlée", &["café", "crème", "brûlée"])]
    #[case("2024 release notes 1234", &["2024", "release", "notes", "1234"])]
    fn test_extraction_cases(#[case] input: &str, #[case] expected: &[&str]) {
        let keywords = extract_keywords(input);
        assert_eq!(keywords.as_slice(), expected);
    }

    #[test]
    fn test_caps_at_five_in_first_occurrence_order() {
        let keywords = extract_keywords(
            "alpha bravo alpha charlie delta bravo echo foxtrot golf",
        );
        assert_eq!(
            keywords.as_slice(),
            &["alpha", "bravo", "charlie", "delta", "echo"]
        );
    }

    #[test]
    fn test_output_properties_hold() {
        let text = "From the archives: Markets rallied, markets fell; analysts with \
                    opinions (and charts) argued that rallies will continue for weeks.";
        let keywords = extract_keywords(text);

        assert!(keywords.len() <= MAX_KEYWORDS);
        for (i, keyword) in keywords.as_slice().iter().enumerate() {
            assert!(keyword.chars().count() > 3);
            assert!(!is_stopword(keyword));
            assert_eq!(keyword, &keyword.to_lowercase());
            assert!(!keywords.as_slice()[i + 1..].contains(keyword));
        }
        assert_eq!(
            keywords.as_slice(),
            &["archives", "markets", "rallied", "fell", "analysts"]
        );
    }

    #[test]
    fn test_working_set_normalization_and_removal() {
        let mut keywords =
            Keywords::from_working_set(["  Rust ", "", "rust", "tokio", "actix", "serde", "tracing", "reqwest"]);
        assert_eq!(
            keywords.as_slice(),
            &["rust", "tokio", "actix", "serde", "tracing"]
        );

        assert!(keywords.remove("actix"));
        assert!(!keywords.remove("actix"));
        assert_eq!(keywords.query(), "rust tokio serde tracing");
    }
}
