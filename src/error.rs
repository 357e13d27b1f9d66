use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{InspectError, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppErrorCode {
    // HTTP 基础错误码
    NotFound,

    // 业务错误码
    InvalidAddress,
    InvalidAmount,
    ExternalServiceError,
}

impl AppErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorCode::NotFound => "not_found",
            AppErrorCode::InvalidAddress => "invalid_address",
            AppErrorCode::InvalidAmount => "invalid_amount",
            AppErrorCode::ExternalServiceError => "external_service_error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub code: AppErrorCode,
    pub message: String,
    pub status: StatusCode,
    pub trace_id: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
    trace_id: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
            trace_id: self.trace_id.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    fn new(code: AppErrorCode, status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            message: msg.into(),
            status,
            trace_id: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(AppErrorCode::NotFound, StatusCode::NOT_FOUND, msg)
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(AppErrorCode::InvalidAddress, StatusCode::BAD_REQUEST, msg)
    }

    /// 上游余额字段不是合法整数，属于上游数据问题
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::new(AppErrorCode::InvalidAmount, StatusCode::BAD_GATEWAY, msg)
    }

    pub fn external_service_error(msg: impl Into<String>) -> Self {
        Self::new(
            AppErrorCode::ExternalServiceError,
            StatusCode::BAD_GATEWAY,
            msg,
        )
    }

    /// 设置追踪ID
    pub fn with_trace_id(mut self, trace_id: String) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

impl From<InspectError> for AppError {
    fn from(err: InspectError) -> Self {
        let message = format!("Failed to fetch account information: {}", err);
        match err {
            InspectError::EmptyAddress => Self::invalid_address(err.to_string()),
            InspectError::Transport(TransportError::Status { status: 404 }) => {
                Self::not_found(message)
            }
            InspectError::Transport(_) => Self::external_service_error(message),
            InspectError::MalformedInput(_) => Self::invalid_amount(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MalformedInput;

    #[test]
    fn test_empty_address_maps_to_bad_request() {
        let err = AppError::from(InspectError::EmptyAddress);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, AppErrorCode::InvalidAddress);
        assert_eq!(err.message, "Please enter a TON address");
    }

    #[test]
    fn test_upstream_status_embedded_in_message() {
        let err = AppError::from(InspectError::from(TransportError::Status { status: 500 }));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.message,
            "Failed to fetch account information: API returned status 500"
        );

        let err = AppError::from(InspectError::from(TransportError::Status { status: 404 }));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_balance() {
        let err = AppError::from(InspectError::from(MalformedInput("x1".into())));
        assert_eq!(err.code, AppErrorCode::InvalidAmount);
        assert!(err.message.contains("x1"));
    }
}
