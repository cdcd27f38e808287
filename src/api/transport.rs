use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Failure raised by a [`Transport`] while performing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Request failed: {0}")]
    Status(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let msg = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout(msg)
        } else if err.is_connect() {
            TransportError::Connect(msg)
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(msg)
        } else {
            TransportError::Other(msg)
        }
    }
}

/// Performs a single HTTP GET and hands back the body as text.
///
/// Retry, timeout and TLS policy belong to the implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let res = self.client.get(url).send().await?;

        if !res.status().is_success() {
            return Err(TransportError::Status(format!("{} ({})", res.status(), url)));
        }

        Ok(res.text().await?)
    }
}
