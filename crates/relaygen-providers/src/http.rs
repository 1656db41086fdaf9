//! Shared HTTP plumbing for the providers: one client, one POST-JSON round trip.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use relaygen_core::utils::truncate_string;

use crate::error::ProviderError;

/// Longest error body kept in a `ProviderError::Status`.
const MAX_ERROR_BODY: usize = 500;

/// Build the connection-pooled client every provider shares.
///
/// A zero `timeout` leaves requests unbounded rather than failing them instantly.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    let mut builder = reqwest::Client::builder();
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ProviderError::Client)
}

/// POST `body` as JSON to `url` and decode a JSON response.
///
/// Non-2xx statuses become `ProviderError::Status` carrying a truncated body.
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
    body: &B,
) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client.post(url).headers(headers).json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(ProviderError::Status {
            status,
            body: truncate_string(&error_text, MAX_ERROR_BODY),
        });
    }

    let bytes = response.bytes().await?;
    debug!(url, bytes = bytes.len(), "Response received");
    Ok(serde_json::from_slice(&bytes)?)
}

/// Treat missing or whitespace-only text as a failed generation.
pub(crate) fn require_text(text: Option<String>) -> Result<String, ProviderError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ProviderError::EmptyResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("hi".into())).unwrap(), "hi");
        assert!(matches!(
            require_text(Some("   ".into())),
            Err(ProviderError::EmptyResponse)
        ));
        assert!(matches!(require_text(None), Err(ProviderError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_post_json_status_error_truncates_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/x"))
            .respond_with(ResponseTemplate::new(503).set_body_string("z".repeat(2000)))
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let url = format!("{}/x", mock_server.uri());
        let err = post_json::<_, serde_json::Value>(&client, &url, HeaderMap::new(), &())
            .await
            .unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body.chars().count(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_post_json_malformed_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let err = post_json::<_, serde_json::Value>(
            &client,
            &mock_server.uri(),
            HeaderMap::new(),
            &serde_json::json!({}),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_post_json_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_millis(50)).unwrap();
        let err = post_json::<_, serde_json::Value>(&client, &mock_server.uri(), HeaderMap::new(), &())
            .await
            .unwrap_err();

        match err {
            ProviderError::Http(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
