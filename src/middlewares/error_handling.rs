use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates non-2xx responses returned from Paystack APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let status_code = response.status().as_u16();
            let bytes = response.bytes().await?;
            let api_error = ApiError::from_response_body(status_code, &bytes);

            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    async fn send_to(mock_server: &MockServer) -> Result<Response, Error> {
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(ErrorHandlingMiddleware)
            .build();

        client.get(mock_server.uri()).send().await.map_err(Error::from)
    }

    #[tokio::test]
    async fn success_responses_are_ignored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("success"))
            .mount(&mock_server)
            .await;

        assert_eq!(
            "success",
            send_to(&mock_server).await.unwrap().text().await.unwrap()
        );
    }

    #[tokio::test]
    async fn json_errors_are_mapped_correctly() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": false,
                "message": "Transfer code is invalid",
                "code": "invalid_params",
                "type": "validation_error",
                "meta": {
                    "nextStep": "Provide a valid transfer code"
                }
            })))
            .mount(&mock_server)
            .await;

        let api_error = match send_to(&mock_server).await.expect_err("Call succeeded") {
            Error::ApiError(api_error) => api_error,
            e => panic!("Unexpected error: {}", e),
        };

        assert_eq!(api_error.status_code, 400);
        assert_eq!(api_error.message, "Transfer code is invalid");
        assert_eq!(api_error.code.as_deref(), Some("invalid_params"));
        assert_eq!(api_error.r#type.as_deref(), Some("validation_error"));
        assert_eq!(api_error.next_step(), "Provide a valid transfer code");
        assert_eq!(api_error.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn non_conforming_errors_default_to_generic_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&mock_server)
            .await;

        let err = send_to(&mock_server).await.expect_err("Call succeeded");

        assert!(err.is_server_error());
        let api_error = err.as_api_error().unwrap();
        assert_eq!(api_error.status_code, 503);
        assert_eq!(api_error.code, None);
        assert_eq!(api_error.next_step(), "");
    }

    #[tokio::test]
    async fn not_found_without_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = send_to(&mock_server).await.expect_err("Call succeeded");

        assert!(err.is_not_found_error());
    }
}
