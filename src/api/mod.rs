use std::{sync::Arc, time::Duration};

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    api::{
        handlers::{api_health, inspect_account, metrics},
        middleware::trace_id_middleware,
    },
    app_state::AppState,
};

pub mod handlers;
pub mod middleware;
pub mod response; // 统一响应格式

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TON Account Inspector API",
        description = "Classifies TON accounts via TonAPI"
    ),
    paths(handlers::inspect_account, handlers::api_health),
    components(schemas(
        crate::service::AccountReport,
        crate::domain::AccountInspection,
        crate::domain::AccountStatus,
        crate::domain::ContractType,
        crate::presenter::AccountSummary,
        crate::presenter::StatusBadge,
        handlers::HealthResponse,
    )),
    tags(
        (name = "accounts", description = "账户状态查询"),
        (name = "health", description = "健康检查")
    )
)]
pub struct ApiDoc;

pub fn routes(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server.cors_allow_origins);

    Router::new()
        .route("/api/v1/accounts/:address", get(inspect_account))
        .route("/health", get(api_health))
        .route("/healthz", get(api_health))
        .route("/metrics", get(metrics))
        .merge(utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(trace_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// 跨域配置：浏览器页面直接调用本服务
fn cors_layer(allow_origins: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allow_origins.trim() == "*" {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allow_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
