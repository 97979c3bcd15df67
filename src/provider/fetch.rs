//! Generic HTTP fetching with status-code mapping and payload validation

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Generic fetch function with comprehensive error handling.
///
/// Issues exactly one request; there is no retry layer because the pipeline
/// is fail-fast and every stage's output is a precondition for the next.
/// Maps HTTP status classes and payload problems onto the error taxonomy so
/// diagnostics always carry the failing URL.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse provider response: {} (URL: {})", e, url);

            // Distinguish malformed JSON from valid JSON with the wrong shape
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::http_client::create_test_http_client;
    use crate::provider::models::CompetitionDetail;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "C1",
                "name": "Test League",
                "logo": "l.png",
                "teams": []
            })))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let detail: CompetitionDetail = fetch(&client, &url).await.unwrap();
        assert_eq!(detail.id, "C1");
        assert_eq!(detail.name, "Test League");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_client_error() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(
            result,
            Err(AppError::ApiClientError { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_unexpected_structure() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        // Valid JSON but missing the required id field
        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"name": "Test", "logo": "l.png"})),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(
            result,
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_empty_body() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/competition"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let url = format!("{}/competition", mock_server.uri());
        let result = fetch::<CompetitionDetail>(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }
}
