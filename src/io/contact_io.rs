use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigError;
use crate::state::contact::ContactPayload;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered HTTP {0}")]
    Status(u16),

    #[error("invalid contact endpoint: {0}")]
    Endpoint(#[from] ConfigError),
}

/// Posts the form as a JSON object. Any non-2xx answer is a failure.
pub async fn post_contact(
    client: &Client,
    endpoint: &Url,
    payload: &ContactPayload,
) -> Result<(), ContactError> {
    let response = client
        .post(endpoint.clone())
        .header(ACCEPT, "application/json")
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    debug!(status = status.as_u16(), "contact endpoint responded");
    if !status.is_success() {
        return Err(ContactError::Status(status.as_u16()));
    }
    Ok(())
}
