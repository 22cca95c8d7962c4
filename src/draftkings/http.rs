//! HTTP retrieval of player exports.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;

use crate::Result;

const USER_AGENT: &str = concat!("dk-lineup/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/csv"));

    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// GET `url` and return the response body. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
    tracing::info!(url, "fetching player export");

    let body = client()?
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    tracing::debug!(bytes = body.len(), "player export received");
    Ok(body)
}
