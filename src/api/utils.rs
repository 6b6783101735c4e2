use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{QuoteFetchError, Result};

pub async fn make_request<T>(client: &Client, base_url: &str, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    debug!(%url, "Sending request");
    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(QuoteFetchError::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<T>(&text)?;

    Ok(data)
}
