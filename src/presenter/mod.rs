//! 展示层
//!
//! 查询流程通过 [`AccountView`] 回调驱动视图，核心逻辑不感知具体 UI
//! （终端、HTTP JSON、浏览器页面都只是不同的实现）。
//! [`AccountSummary`] 是已经完成显示格式化的只读模型。

pub mod terminal;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{AccountInspection, AccountStatus, ContractType},
    utils::{explorer_url, format_display},
};

pub use terminal::TerminalView;

/// 无活跃记录时的占位文本
pub const NO_ACTIVITY: &str = "No activity recorded";

/// 查询过程中被驱动的视图
pub trait AccountView {
    fn set_loading(&mut self, loading: bool);

    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    fn hide_results(&mut self);

    fn show_results(&mut self, summary: &AccountSummary);
}

/// 状态徽章配色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBadge {
    pub background: String,
    pub color: String,
    pub border: String,
}

impl StatusBadge {
    pub fn for_status(status: AccountStatus) -> Self {
        let (rgb, color) = match status {
            AccountStatus::Active => ("16, 185, 129", "#10b981"),
            AccountStatus::Frozen => ("239, 68, 68", "#ef4444"),
            AccountStatus::Uninitialized => ("245, 158, 11", "#f59e0b"),
        };
        Self {
            background: format!("rgba({}, 0.2)", rgb),
            color: color.to_string(),
            border: format!("1px solid rgba({}, 0.3)", rgb),
        }
    }
}

/// 已格式化的账户摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub address: String,
    pub status: AccountStatus,
    /// 大写状态文本，如 "ACTIVE"
    pub status_label: String,
    /// 样式类名，如 "status-active"
    pub status_class: String,
    pub badge: StatusBadge,
    /// 如 "12.35 TON"
    pub balance: String,
    pub contract_type: ContractType,
    pub last_activity: String,
    pub has_activity: bool,
    pub explorer_url: String,
}

impl AccountSummary {
    /// `balance_text` 由调用方按格式化策略（严格/宽松）预先生成
    pub fn build(inspection: &AccountInspection, balance_text: String, explorer_base: &str) -> Self {
        let status = inspection.status;
        let last_activity = inspection
            .last_activity
            .as_ref()
            .map(format_display)
            .unwrap_or_else(|| NO_ACTIVITY.to_string());

        Self {
            address: inspection.address.clone(),
            status,
            status_label: status.as_str().to_uppercase(),
            status_class: format!("status-{}", status),
            badge: StatusBadge::for_status(status),
            balance: balance_text,
            contract_type: inspection.contract_type,
            last_activity,
            has_activity: inspection.last_activity.is_some(),
            explorer_url: explorer_url(explorer_base, &inspection.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::RawAccountRecord;

    #[test]
    fn test_build_summary() {
        let inspection = AccountInspection::from_record(
            "EQabc",
            RawAccountRecord::from(json!({
                "status": "frozen",
                "last_activity": 1700000000,
                "interfaces": ["dns_item"]
            })),
        );
        let summary =
            AccountSummary::build(&inspection, "0 TON".to_string(), "https://tonviewer.com");

        assert_eq!(summary.status_label, "FROZEN");
        assert_eq!(summary.status_class, "status-frozen");
        assert_eq!(summary.badge.color, "#ef4444");
        assert_eq!(summary.badge.background, "rgba(239, 68, 68, 0.2)");
        assert_eq!(summary.badge.border, "1px solid rgba(239, 68, 68, 0.3)");
        assert_eq!(summary.contract_type, ContractType::SmartContract);
        assert_eq!(summary.last_activity, "2023-11-14 22:13:20 UTC");
        assert!(summary.has_activity);
        assert_eq!(summary.explorer_url, "https://tonviewer.com/EQabc");
    }

    #[test]
    fn test_no_activity_placeholder() {
        let inspection = AccountInspection::from_record("EQx", RawAccountRecord::default());
        let summary = AccountSummary::build(&inspection, "0 TON".into(), "https://tonviewer.com");
        assert_eq!(summary.last_activity, NO_ACTIVITY);
        assert!(!summary.has_activity);
        assert_eq!(summary.status_label, "UNINITIALIZED");
        assert_eq!(summary.badge.color, "#f59e0b");
    }
}
