/// Shared HTTP plumbing for the API clients
use crate::errors::ApiError;
use log::{error, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// First retry delay; doubles on every further attempt.
const RETRY_BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Per-client request behavior.
///
/// The defaults reproduce the upstream wrapper exactly: no client-enforced
/// timeout (a hung request blocks its caller until the transport gives up)
/// and no retries (a single failed attempt surfaces immediately).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Deadline applied to each individual request attempt.
    pub timeout: Option<Duration>,
    /// Extra attempts after the first for transport failures and
    /// retryable statuses (429 and 5xx), with exponential backoff.
    pub retries: u32,
}

/// HTTP request gateway: one GET, status check, JSON decode.
///
/// Every provider method funnels through [`HttpClient::get_json`]. The body
/// is read as text and parsed separately so a malformed payload surfaces as
/// [`ApiError::Decode`] rather than being folded into a transport failure.
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Effective request configuration for this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET to `url` (plus optional query pairs) and decode the JSON
    /// body. Failures are logged with `tag` and `operation` before they
    /// propagate.
    pub async fn get_json(
        &self,
        tag: &str,
        operation: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let mut attempt: u32 = 0;
        let mut backoff = RETRY_BACKOFF_BASE;

        loop {
            let mut request = self.client.get(url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(timeout) = self.config.timeout {
                request = request.timeout(timeout);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = match response.text().await {
                            Ok(body) => body,
                            Err(err) => {
                                error!(
                                    "[{}] {}: failed to read response body: {}",
                                    tag, operation, err
                                );
                                return Err(ApiError::Transport(err));
                            }
                        };
                        return serde_json::from_str(&body).map_err(|err| {
                            error!("[{}] {}: invalid JSON in response: {}", tag, operation, err);
                            ApiError::Decode(err)
                        });
                    }

                    if !is_retryable(status) || attempt >= self.config.retries {
                        error!("[{}] {}: HTTP {} from {}", tag, operation, status, url);
                        return Err(ApiError::Request { status });
                    }
                    warn!(
                        "[{}] {}: HTTP {}, retrying in {:?} (attempt {}/{})",
                        tag,
                        operation,
                        status,
                        backoff,
                        attempt + 1,
                        self.config.retries
                    );
                }
                Err(err) => {
                    if attempt >= self.config.retries {
                        error!("[{}] {}: request failed: {}", tag, operation, err);
                        return Err(ApiError::Transport(err));
                    }
                    warn!(
                        "[{}] {}: request failed ({}), retrying in {:?} (attempt {}/{})",
                        tag,
                        operation,
                        err,
                        backoff,
                        attempt + 1,
                        self.config.retries
                    );
                }
            }

            attempt += 1;
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway() -> HttpClient {
        HttpClient::new(ClientConfig::default())
    }

    #[test]
    fn test_default_config_has_no_timeout_or_retries() {
        let config = gateway().config().clone();
        assert_eq!(config.timeout, None);
        assert_eq!(config.retries, 0);
    }

    #[tokio::test]
    async fn test_success_returns_decoded_body() {
        let server = MockServer::start().await;
        let body = json!({"pairs": [{"chainId": "solana"}], "schemaVersion": "1.0.0"});
        Mock::given(method("GET"))
            .and(path("/latest/dex/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let url = format!("{}/latest/dex/search", server.uri());
        let result = gateway().get_json("TEST", "search", &url, &[]).await;
        assert_eq!(result.unwrap(), body);
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = gateway()
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        match err {
            ApiError::Request { status } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = gateway()
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_transport_error() {
        // Nothing listens on port 9; the connection is refused immediately.
        let err = gateway()
            .get_json("TEST", "lookup", "http://127.0.0.1:9/latest", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(ClientConfig {
            timeout: Some(Duration::from_millis(50)),
            retries: 0,
        });
        let err = client
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        match err {
            ApiError::Transport(inner) => assert!(inner.is_timeout()),
            other => panic!("expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_retries_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway()
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        match err {
            ApiError::Request { status } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retries_reattempt_retryable_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let client = HttpClient::new(ClientConfig {
            timeout: None,
            retries: 2,
        });
        let err = client
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        match err {
            ApiError::Request { status } => assert_eq!(status, StatusCode::TOO_MANY_REQUESTS),
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retry_recovers_after_transient_failure() {
        let server = MockServer::start().await;
        // First attempt fails with 503, the second one succeeds.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(ClientConfig {
            timeout: None,
            retries: 1,
        });
        let result = client
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(ClientConfig {
            timeout: None,
            retries: 3,
        });
        let err = client
            .get_json("TEST", "lookup", &server.uri(), &[])
            .await
            .unwrap_err();
        match err {
            ApiError::Request { status } => assert_eq!(status, StatusCode::BAD_REQUEST),
            other => panic!("expected Request error, got {:?}", other),
        }
    }
}
