//! Mapping of HTTP and transport failures to [`GatewayError`].

use twentyq_application::GatewayError;

/// Map an HTTP status code from the chat completions endpoint.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> GatewayError {
    let detail = error_message(body);
    match status.as_u16() {
        401 | 403 => GatewayError::Authentication(detail),
        404 => GatewayError::ModelNotAvailable(detail),
        429 => GatewayError::RateLimited(detail),
        500..=599 => GatewayError::ServiceUnavailable(detail),
        _ => GatewayError::RequestFailed(format!("HTTP {status}: {detail}")),
    }
}

/// Map a [`reqwest::Error`] raised while sending or reading a request.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::Connection(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_401_to_authentication() {
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "Invalid API key");
        assert!(matches!(err, GatewayError::Authentication(_)));
    }

    #[test]
    fn test_map_404_to_model_not_available() {
        let err = map_http_status(reqwest::StatusCode::NOT_FOUND, "no such model");
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));
    }

    #[test]
    fn test_map_429_to_rate_limited() {
        let err = map_http_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, GatewayError::RateLimited(_)));
    }

    #[test]
    fn test_map_5xx_to_service_unavailable() {
        let err = map_http_status(reqwest::StatusCode::BAD_GATEWAY, "Bad gateway");
        assert!(matches!(err, GatewayError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_map_unknown_status_to_request_failed() {
        let err = map_http_status(reqwest::StatusCode::IM_A_TEAPOT, "teapot");
        match err {
            GatewayError::RequestFailed(msg) => assert!(msg.contains("418")),
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_from_api_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(
            err.to_string(),
            "Authentication failed: Incorrect API key provided"
        );
    }
}
