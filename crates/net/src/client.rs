//! HTTP client for the guest directory service

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::protocol::GuestPayload;
use crate::DEFAULT_TIMEOUT_SECS;

/// Client handle for directory requests
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DirectoryClient {
    /// Create a client for the service at `base_url`, authenticating with `token`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_http_client(http, base_url, token))
    }

    /// Create a client over a preconfigured `reqwest::Client`
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn guests_url(&self, event_id: &str) -> String {
        format!("{}/events/{}/guests", self.base_url, event_id)
    }

    /// Fetch every guest registered for an event. Failures are not retried.
    #[instrument(skip(self))]
    pub async fn fetch_guests(&self, event_id: &str) -> Result<Vec<GuestPayload>> {
        let url = self.guests_url(event_id);
        debug!(url = %url, "Requesting guest list");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let guests = GuestPayload::list_from_bytes(&body)?;
        info!(count = guests.len(), "Guest list received");
        Ok(guests)
    }
}

/// Pull a readable message out of an error body
fn error_message(body: &[u8]) -> String {
    let from_json = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    from_json.unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body).trim().to_string();
        if text.is_empty() {
            "Unknown error".to_string()
        } else {
            text
        }
    })
}
