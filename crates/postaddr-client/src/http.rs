//! HTTP transport for the metadata service

use std::time::Duration;

use async_trait::async_trait;
use postaddr_cache::{AsyncRequest, TransportError};
use postaddr_common::{Error, Result};
use tracing::debug;

/// [`AsyncRequest`] over `reqwest`
#[derive(Clone, Debug)]
pub struct HttpRequest {
    http_client: reqwest::Client,
}

impl HttpRequest {
    /// Create a transport; `connect_timeout` bounds connection setup only
    pub fn new(connect_timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| Error::Configuration(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl AsyncRequest for HttpRequest {
    async fn request_object(&self, url: &str, timeout: Duration) -> std::result::Result<String, TransportError> {
        debug!(url = %url, "GET");
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Unavailable(e.to_string())
            }
        };

        let response = self
            .http_client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(map_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        response.text().await.map_err(map_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_service() {
        let transport = HttpRequest::new(Duration::from_millis(500)).unwrap();
        let result = transport
            .request_object("http://127.0.0.1:1/data/US", Duration::from_millis(500))
            .await;
        assert!(matches!(
            result,
            Err(TransportError::Unavailable(_) | TransportError::Timeout)
        ));
    }
}
