//! 测试辅助模块
//! 提供进程内的假 TonAPI 服务与测试配置

#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use ton_inspector::config::{
    BalanceConfig, Config, ExplorerConfig, LoggingConfig, ServerConfig, TonApiConfig,
};

/// 假上游对某个地址的响应
#[derive(Clone)]
pub enum Fixture {
    Json(Value),
    Status(u16),
    RawBody(&'static str),
}

/// 常用测试地址
pub const ACTIVE_WALLET: &str = "EQActiveWallet";
pub const FROZEN_ACCOUNT: &str = "EQFrozen";
pub const UNINIT_ACCOUNT: &str = "EQUninit";
pub const MISSING_ACCOUNT: &str = "EQMissing";
pub const BROKEN_UPSTREAM: &str = "EQBroken";
pub const GARBAGE_BODY: &str = "EQGarbage";
pub const BAD_BALANCE: &str = "EQBadBalance";

/// 默认夹具集合
pub fn default_fixtures() -> HashMap<String, Fixture> {
    let mut fixtures = HashMap::new();
    fixtures.insert(
        ACTIVE_WALLET.to_string(),
        Fixture::Json(json!({
            "address": "0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8",
            "balance": 12345000000u64,
            "last_activity": 1700000000,
            "status": "active",
            "interfaces": ["wallet_v4r2"],
            "get_methods": ["seqno", "get_public_key"],
            "is_wallet": true
        })),
    );
    fixtures.insert(
        FROZEN_ACCOUNT.to_string(),
        Fixture::Json(json!({ "status": "frozen", "balance": 0 })),
    );
    fixtures.insert(
        UNINIT_ACCOUNT.to_string(),
        Fixture::Json(json!({ "status": "uninit", "balance": 0, "last_activity": 0 })),
    );
    fixtures.insert(MISSING_ACCOUNT.to_string(), Fixture::Status(404));
    fixtures.insert(BROKEN_UPSTREAM.to_string(), Fixture::Status(500));
    fixtures.insert(GARBAGE_BODY.to_string(), Fixture::RawBody("<html>oops</html>"));
    fixtures.insert(
        BAD_BALANCE.to_string(),
        Fixture::Json(json!({ "status": "active", "balance": "ten" })),
    );
    fixtures
}

async fn account_handler(
    State(fixtures): State<Arc<HashMap<String, Fixture>>>,
    Path(address): Path<String>,
) -> Response {
    match fixtures.get(&address) {
        Some(Fixture::Json(v)) => axum::Json(v.clone()).into_response(),
        Some(Fixture::Status(code)) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, axum::Json(json!({ "error": "entity not found" }))).into_response()
        }
        Some(Fixture::RawBody(body)) => (StatusCode::OK, *body).into_response(),
        None => (StatusCode::NOT_FOUND, "unknown fixture").into_response(),
    }
}

/// 启动假 TonAPI，返回 base_url（形如 http://127.0.0.1:PORT/v2）
pub async fn spawn_fake_tonapi(fixtures: HashMap<String, Fixture>) -> String {
    let app = Router::new()
        .route("/v2/accounts/:address", get(account_handler))
        .with_state(Arc::new(fixtures));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake TonAPI");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake TonAPI crashed");
    });

    format!("http://{}/v2", addr)
}

/// 指向假上游的测试配置（不读取环境变量）
pub fn test_config(tonapi_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
            cors_allow_origins: "*".into(),
        },
        logging: LoggingConfig {
            level: "debug".into(),
            format: "text".into(),
            enable_file_logging: false,
            log_file_path: None,
        },
        tonapi: TonApiConfig {
            base_url: tonapi_base_url.to_string(),
            timeout_secs: Some(5),
            connect_timeout_secs: Some(2),
        },
        explorer: ExplorerConfig {
            base_url: "https://tonviewer.com".into(),
        },
        balance: BalanceConfig {
            strict_format: true,
        },
    }
}
