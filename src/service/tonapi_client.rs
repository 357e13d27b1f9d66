// TonAPI 客户端
// 只有一个调用：GET {base_url}/accounts/{address}，无重试、无缓存

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::{
    config::TonApiConfig,
    domain::{RawAccountRecord, TransportError},
};

/// 账户数据来源（便于在测试中替换上游）
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn fetch_account(&self, address: &str) -> Result<RawAccountRecord, TransportError>;
}

pub struct TonApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl TonApiClient {
    pub fn new(config: &TonApiConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ton-inspector/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client: client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_url(&self, address: &str) -> String {
        format!("{}/accounts/{}", self.base_url, address)
    }

    async fn request_account(&self, address: &str) -> Result<RawAccountRecord, TransportError> {
        let url = self.account_url(address);
        tracing::debug!(url = %url, "Fetching account from TonAPI");

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TransportError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<RawAccountRecord>()
            .await
            .map_err(TransportError::Decode)
    }
}

#[async_trait]
impl AccountSource for TonApiClient {
    async fn fetch_account(&self, address: &str) -> Result<RawAccountRecord, TransportError> {
        let started = Instant::now();
        let result = self.request_account(address).await;
        let elapsed_ms = started.elapsed().as_millis();

        crate::metrics::observe_upstream_latency_ms(elapsed_ms, result.is_ok());
        match &result {
            Ok(_) => tracing::info!(
                address = %address,
                latency_ms = elapsed_ms as u64,
                "TonAPI account fetched"
            ),
            Err(e) => tracing::warn!(
                address = %address,
                error = %e,
                latency_ms = elapsed_ms as u64,
                "TonAPI account fetch failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> TonApiClient {
        TonApiClient::new(&TonApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
            connect_timeout_secs: None,
        })
    }

    #[test]
    fn test_account_url() {
        let c = client("https://tonapi.io/v2/");
        assert_eq!(c.base_url(), "https://tonapi.io/v2");
        assert_eq!(
            c.account_url("0:abcdef"),
            "https://tonapi.io/v2/accounts/0:abcdef"
        );
    }

    #[test]
    fn test_unreachable_upstream_is_network_error() {
        // 端口 9 (discard) 在测试环境中通常无人监听
        let c = client("http://127.0.0.1:9");
        let result = tokio_test::block_on(c.fetch_account("EQabc"));
        match result {
            Err(TransportError::Network(_)) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
