use serde::Deserialize;

/// Query parameters for the search endpoint
///
/// `q` is optional at the deserialization layer so the handler can answer a
/// missing parameter with a plain-text 400 instead of an extractor error.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}
