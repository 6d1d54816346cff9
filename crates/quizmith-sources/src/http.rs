//! HTTP configuration fetcher.

use async_trait::async_trait;

use quizmith_core::error::ConfigError;
use quizmith_core::traits::ConfigFetcher;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches the quiz document from an HTTP(S) URL.
pub struct HttpFetcher {
    url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ConfigFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<String, ConfigError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ConfigError::Unavailable(format!("request to {} failed: {e}", self.url)))?;

        if !response.status().is_success() {
            return Err(ConfigError::Unavailable(format!(
                "{} returned HTTP {}",
                self.url,
                response.status().as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ConfigError::Unavailable(format!("reading body from {} failed: {e}", self.url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_document_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quiz-data.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"questions": []})),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(format!("{}/quiz-data.json", server.uri()));
        let body = fetcher.fetch().await.unwrap();
        assert!(body.contains("questions"));
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(format!("{}/quiz-data.json", server.uri()));
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn connection_failure_is_unavailable() {
        // Nothing listens on this port.
        let fetcher = HttpFetcher::new("http://127.0.0.1:9/quiz-data.json");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
