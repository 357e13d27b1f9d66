//! TonAPI 客户端集成测试（进程内假上游）

mod common;

use common::*;
use ton_inspector::{
    domain::TransportError,
    service::{AccountSource, TonApiClient},
};

async fn client() -> TonApiClient {
    let base_url = spawn_fake_tonapi(default_fixtures()).await;
    TonApiClient::new(&test_config(&base_url).tonapi)
}

#[tokio::test]
async fn test_fetch_account_success() {
    let client = client().await;
    let record = client.fetch_account(ACTIVE_WALLET).await.unwrap();

    assert_eq!(record.resolve_balance(), "12345000000");
    assert_eq!(
        record.state_indicator().and_then(|v| v.as_str()),
        Some("active")
    );
    assert_eq!(record.last_activity(), Some(1_700_000_000));
}

#[tokio::test]
async fn test_non_success_status_surfaces_code() {
    let client = client().await;

    let err = client.fetch_account(MISSING_ACCOUNT).await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 404 }));
    assert_eq!(err.to_string(), "API returned status 404");

    let err = client.fetch_account(BROKEN_UPSTREAM).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API returned status 500");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let client = client().await;
    let err = client.fetch_account(GARBAGE_BODY).await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}
