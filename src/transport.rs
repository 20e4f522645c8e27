use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::{ActransitError, ActransitResult};

/// One GET request, body decoded as JSON.
///
/// The client is generic over this so tests can substitute canned
/// responses for the live service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_json(&self, url: Url) -> ActransitResult<Value>;
}

/// Production transport over [`reqwest`].
///
/// No retries and no timeout beyond reqwest's defaults; the API rejects
/// missing or invalid tokens with an error status, surfaced here as
/// [`ActransitError::Response`].
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> ActransitResult<HttpTransport> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, url: Url) -> ActransitResult<Value> {
        log::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        log::trace!("Response: {}", body);

        if !status.is_success() {
            return Err(ActransitError::Response(status.as_u16(), body));
        }

        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
