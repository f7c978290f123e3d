//! Error conversions
//!
//! HTTP rendering of [`AppError`] when the `axum` feature is on.

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side details stay in the logs; the client only sees the message.
        let body = serde_json::json!({
            "success": false,
            "status": self.status_code(),
            "error": self.code(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::app_error::AppError;

    #[test]
    fn test_into_response_status() {
        let response = AppError::forbidden("nope").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_custom_code_keeps_kind_status() {
        let response = AppError::bad_request("User already exists")
            .with_code("DUPLICATE_EMAIL")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
