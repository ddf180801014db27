use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct HeadlinesEnvelope {
    #[serde(rename = "totalArticles")]
    pub(crate) total_articles: Option<u64>,
    // Kept loose: individual entries may be malformed and are skipped, not fatal.
    pub(crate) articles: Option<Value>,
}

/// Title of one article entry, if it is an object carrying a string `title`.
pub(crate) fn title_of(article: &Value) -> Option<&str> {
    article.as_object()?.get("title")?.as_str()
}
