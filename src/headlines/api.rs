use crate::{
    config::format_from,
    core::{
        FetchParameters, HsError, NewsClient,
        net::{self, Fixture},
    },
    headlines::wire,
};

pub(super) async fn fetch_headlines(
    client: &NewsClient,
    params: &FetchParameters,
    lang: &str,
    country: &str,
) -> Result<Vec<String>, HsError> {
    let mut url = client.base_news().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("lang", lang);
        qp.append_pair("country", country);
        if let Some(from) = params.from_date {
            qp.append_pair("from", &format_from(from));
        }
        qp.append_pair("max", &params.max_results.to_string());
        qp.append_pair("apikey", params.api_key.expose());
    }

    // reqwest errors quote the request URL, which carries the key.
    let resp = client
        .http()
        .get(url)
        .send()
        .await
        .map_err(|e| HsError::Http(e.without_url()))?;

    if !resp.status().is_success() {
        return Err(HsError::status(&resp));
    }

    let body = net::read_body(resp, Fixture::Headlines { country })
        .await
        .map_err(|e| HsError::Http(e.without_url()))?;
    parse_headlines(&body, params.max_results)
}

pub(super) fn parse_headlines(body: &str, max_results: u32) -> Result<Vec<String>, HsError> {
    let envelope: wire::HeadlinesEnvelope = serde_json::from_str(body)?;

    let articles = envelope
        .articles
        .ok_or_else(|| HsError::Data("missing `articles` in response".into()))?;
    let articles = articles
        .as_array()
        .ok_or_else(|| HsError::Data("`articles` is not an array".into()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        returned = articles.len(),
        total = ?envelope.total_articles,
        "parsed headlines envelope"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = envelope.total_articles;

    Ok(articles
        .iter()
        .filter_map(wire::title_of)
        .take(max_results as usize)
        .map(str::to_string)
        .collect())
}
