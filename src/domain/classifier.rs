//! 账户状态分类器
//!
//! 上游在不同响应形态/版本之间并不一致：显式且无歧义的状态值优先，
//! 其次以"有资金或已初始化"的证据为准，覆盖可能过期或缺失的状态字段。
//! 分类器是全函数，任何缺失或畸形输入都降级为 `uninitialized` / `Unknown`。

use serde_json::Value;

use super::{
    account_record::RawAccountRecord,
    account_status::{AccountStatus, ContractType},
    balance::has_positive_balance,
};

/// 从原始记录中收集到的初始化证据
#[derive(Debug, Clone, Copy)]
pub struct AccountEvidence<'a> {
    pub state: Option<&'a Value>,
    pub has_code: bool,
    pub has_data: bool,
    pub has_balance: bool,
}

impl<'a> AccountEvidence<'a> {
    pub fn collect(record: &'a RawAccountRecord, resolved_balance: &str) -> Self {
        Self {
            state: record.state_indicator(),
            has_code: record.has_code(),
            has_data: record.has_data(),
            has_balance: has_positive_balance(resolved_balance),
        }
    }

    fn has_any_evidence(&self) -> bool {
        self.has_balance || self.has_code || self.has_data
    }

    /// 按优先级求值，首个命中即返回
    pub fn status(&self) -> AccountStatus {
        let state = self.state.and_then(Value::as_str);

        if state.map_or(false, AccountStatus::is_active_indicator) {
            return AccountStatus::Active;
        }
        if state.map_or(false, AccountStatus::is_frozen_indicator) {
            return AccountStatus::Frozen;
        }

        // 有余额的账户不可能是未初始化
        if self.has_balance {
            return AccountStatus::Active;
        }
        if self.has_code || self.has_data {
            return AccountStatus::Active;
        }

        if state.map_or(false, AccountStatus::is_uninit_indicator) && !self.has_any_evidence() {
            return AccountStatus::Uninitialized;
        }
        if self.state.is_none() && !self.has_any_evidence() {
            return AccountStatus::Uninitialized;
        }

        // 兜底：状态不明但有证据
        if self.has_any_evidence() {
            return AccountStatus::Active;
        }

        AccountStatus::Uninitialized
    }
}

/// 仅对账户状态分类
pub fn classify_status(record: &RawAccountRecord, resolved_balance: &str) -> AccountStatus {
    AccountEvidence::collect(record, resolved_balance).status()
}

/// 仅对合约类型分类
pub fn classify_contract_type(record: &RawAccountRecord) -> ContractType {
    ContractType::from_interfaces(record.interfaces())
}

/// 分类账户：(状态, 合约类型)
pub fn classify(record: &RawAccountRecord, resolved_balance: &str) -> (AccountStatus, ContractType) {
    (
        classify_status(record, resolved_balance),
        classify_contract_type(record),
    )
}
