//! 账户查询编排
//!
//! 输入规范化 → 拉取上游记录 → 余额解析与分类 → 生成展示摘要。
//! 一次查询只发一个请求，不持有跨调用的状态。

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use super::tonapi_client::AccountSource;
use crate::{
    config::{BalanceConfig, ExplorerConfig},
    domain::{format_balance, format_balance_or_zero, AccountInspection, InspectError},
    presenter::{AccountSummary, AccountView},
    utils::normalize_address,
};

/// 查询结果 + 展示摘要
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountReport {
    pub inspection: AccountInspection,
    pub summary: AccountSummary,
}

pub struct AccountInspector {
    source: Arc<dyn AccountSource>,
    explorer_base_url: String,
    strict_format: bool,
}

impl AccountInspector {
    pub fn new(
        source: Arc<dyn AccountSource>,
        explorer: &ExplorerConfig,
        balance: &BalanceConfig,
    ) -> Self {
        Self {
            source,
            explorer_base_url: explorer.base_url.clone(),
            strict_format: balance.strict_format,
        }
    }

    /// 查询并分类，返回结果记录
    pub async fn inspect(&self, input: &str) -> Result<AccountInspection, InspectError> {
        let address = normalize_address(input)?;
        let raw = self.source.fetch_account(&address).await?;
        let inspection = AccountInspection::from_record(address, raw);

        crate::metrics::inc_classification(inspection.status);
        tracing::info!(
            address = %inspection.address,
            status = %inspection.status,
            contract_type = %inspection.contract_type,
            balance = %inspection.balance,
            "Account classified"
        );

        Ok(inspection)
    }

    /// 按配置的格式化策略生成展示摘要
    pub fn summarize(&self, inspection: &AccountInspection) -> Result<AccountSummary, InspectError> {
        let balance_text = if self.strict_format {
            format_balance(&inspection.balance)?
        } else {
            format_balance_or_zero(&inspection.balance)
        };
        Ok(AccountSummary::build(
            inspection,
            balance_text,
            &self.explorer_base_url,
        ))
    }

    /// 查询并生成完整报告
    pub async fn report(&self, input: &str) -> Result<AccountReport, InspectError> {
        let inspection = self.inspect(input).await?;
        let summary = self.summarize(&inspection)?;
        Ok(AccountReport {
            inspection,
            summary,
        })
    }

    /// 驱动视图完成一次查询
    ///
    /// 空输入直接提示错误；否则 loading → 清空旧错误与旧结果 → 请求 →
    /// 成功展示结果 / 失败展示错误（不展示部分结果）→ 结束 loading。
    pub async fn inspect_into<V: AccountView + ?Sized>(
        &self,
        view: &mut V,
        input: &str,
    ) -> Option<AccountReport> {
        if let Err(e) = normalize_address(input) {
            view.show_error(&e.to_string());
            return None;
        }

        view.set_loading(true);
        view.hide_error();
        view.hide_results();

        let outcome = match self.report(input).await {
            Ok(report) => {
                view.show_results(&report.summary);
                Some(report)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Account inspection failed");
                view.show_error(&format!("Failed to fetch account information: {}", e));
                None
            }
        };

        view.set_loading(false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::domain::{AccountStatus, RawAccountRecord, TransportError};

    struct StaticSource {
        body: serde_json::Value,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AccountSource for StaticSource {
        async fn fetch_account(&self, address: &str) -> Result<RawAccountRecord, TransportError> {
            self.requested.lock().unwrap().push(address.to_string());
            Ok(RawAccountRecord::from(self.body.clone()))
        }
    }

    fn inspector(body: serde_json::Value, strict: bool) -> (AccountInspector, Arc<StaticSource>) {
        let source = Arc::new(StaticSource {
            body,
            requested: Mutex::new(Vec::new()),
        });
        let inspector = AccountInspector::new(
            source.clone(),
            &ExplorerConfig {
                base_url: "https://tonviewer.com".into(),
            },
            &BalanceConfig {
                strict_format: strict,
            },
        );
        (inspector, source)
    }

    #[tokio::test]
    async fn test_inspect_normalizes_address() {
        let (inspector, source) = inspector(json!({ "balance": 5000000000u64 }), true);
        let inspection = inspector.inspect("  EQab cd \n").await.unwrap();

        assert_eq!(inspection.address, "EQabcd");
        assert_eq!(inspection.status, AccountStatus::Active);
        assert_eq!(*source.requested.lock().unwrap(), vec!["EQabcd".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_input_skips_fetch() {
        let (inspector, source) = inspector(json!({}), true);
        let err = inspector.inspect("   ").await.unwrap_err();
        assert!(matches!(err, InspectError::EmptyAddress));
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_strict_vs_lenient() {
        let body = json!({ "balance": "lots", "status": "active" });

        let (strict, _) = inspector(body.clone(), true);
        let err = strict.report("EQx").await.unwrap_err();
        assert!(matches!(err, InspectError::MalformedInput(_)));

        let (lenient, _) = inspector(body, false);
        let report = lenient.report("EQx").await.unwrap();
        assert_eq!(report.summary.balance, "0 TON");
        assert_eq!(report.summary.status_label, "ACTIVE");
    }
}
