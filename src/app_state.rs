use std::sync::Arc;

use crate::{
    config::Config,
    service::{AccountInspector, AccountSource, TonApiClient},
};

/// 应用状态
/// 包含所有共享资源
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub inspector: Arc<AccountInspector>,
}

impl AppState {
    /// 使用真实 TonAPI 客户端创建应用状态
    pub fn new(config: Arc<Config>) -> Self {
        let client = Arc::new(TonApiClient::new(&config.tonapi));
        tracing::info!(base_url = %client.base_url(), "TonAPI client initialized");
        Self::with_source(config, client)
    }

    /// 使用指定数据源创建（测试中注入假上游）
    pub fn with_source(config: Arc<Config>, source: Arc<dyn AccountSource>) -> Self {
        let inspector = Arc::new(AccountInspector::new(
            source,
            &config.explorer,
            &config.balance,
        ));
        Self { config, inspector }
    }
}
