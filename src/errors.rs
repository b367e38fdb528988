use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request error: {0}")]
    RequestError(#[from] RequestError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Advisor error: {0}")]
    AdvisorError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// 打外部 API 時的錯誤
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("連接失敗: {0}")]
    ConnectFail(#[from] reqwest::Error),
    #[error("{0}")]
    InvalidContent(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RequestError(RequestError::ConnectFail(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::RequestError(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AdvisorError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // 4xx 是呼叫端的問題，不算 server error
        if status_code.is_client_error() {
            tracing::warn!("{}", self);
        } else {
            tracing::error!("{}", self);
        }

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("multiplier".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let response = AppError::RequestError(RequestError::InvalidContent("boom".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = AppError::AdvisorError("No strategic signal received.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_key_is_service_unavailable() {
        let response = AppError::ConfigError("GEMINI_API_KEY".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
