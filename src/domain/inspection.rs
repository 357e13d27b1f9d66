//! 账户查询结果记录
//! 交给展示层的唯一数据结构，所有显示格式化都在 presenter 中完成

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    account_record::RawAccountRecord,
    account_status::{AccountStatus, ContractType},
    classifier::classify,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountInspection {
    /// 规范化后的地址（已去除空白）
    pub address: String,
    pub status: AccountStatus,
    /// 解析出的 nanoton 余额文本（未格式化）
    pub balance: String,
    pub contract_type: ContractType,
    /// 最近活跃时间（RFC3339）
    pub last_activity: Option<DateTime<Utc>>,
    /// 上游原始响应
    #[schema(value_type = Object)]
    pub raw: RawAccountRecord,
}

impl AccountInspection {
    /// 从上游记录构建：解析余额 → 分类 → 转换活跃时间
    pub fn from_record(address: impl Into<String>, raw: RawAccountRecord) -> Self {
        let balance = raw.resolve_balance();
        let (status, contract_type) = classify(&raw, &balance);
        let last_activity = raw.last_activity().and_then(unix_to_datetime);

        Self {
            address: address.into(),
            status,
            balance,
            contract_type,
            last_activity,
            raw,
        }
    }
}

/// Unix 秒 → UTC 时间，超出可表示范围返回 None
pub fn unix_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}
