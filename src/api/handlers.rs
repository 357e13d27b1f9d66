use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::{
        middleware::TraceId,
        response::{success_response, ApiResponse},
    },
    app_state::AppState,
    error::AppError,
    service::AccountReport,
    utils::format_timestamp,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/{address}",
    params(("address" = String, Path, description = "TON address (raw or user-friendly form)")),
    responses(
        (status = 200, description = "Account classified", body = AccountReport),
        (status = 400, description = "Empty address"),
        (status = 404, description = "Upstream reported unknown account"),
        (status = 502, description = "Upstream failure or malformed balance")
    ),
    tag = "accounts"
)]
pub async fn inspect_account(
    State(st): State<Arc<AppState>>,
    trace_id: Option<Extension<TraceId>>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<AccountReport>>, AppError> {
    match st.inspector.report(&address).await {
        Ok(report) => {
            crate::metrics::count_ok("GET /api/v1/accounts/:address");
            success_response(report)
        }
        Err(e) => {
            crate::metrics::count_err("GET /api/v1/accounts/:address");
            let mut err = AppError::from(e);
            if let Some(Extension(TraceId(id))) = trace_id {
                err = err.with_trace_id(id);
            }
            tracing::warn!(
                code = err.code.as_str(),
                trace_id = ?err.trace_id,
                message = %err.message,
                "Account lookup failed"
            );
            Err(err)
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "OK", body = HealthResponse)),
    tag = "health"
)]
pub async fn api_health() -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    crate::metrics::count_ok("GET /health");
    success_response(HealthResponse {
        status: "ok".into(),
        version: format!(
            "{}+{}",
            env!("CARGO_PKG_VERSION"),
            option_env!("GIT_HASH").unwrap_or("dev")
        ),
        timestamp: format_timestamp(&chrono::Utc::now()),
    })
}

pub async fn metrics() -> impl IntoResponse {
    crate::metrics::render_prometheus()
}
