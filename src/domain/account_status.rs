//! 账户状态与合约类型
//! 封闭枚举，每次分类恰好产生一个值

use std::{collections::HashSet, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 账户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// 已初始化（已部署或持有余额）
    Active,

    /// 被冻结（存储费欠缴）
    Frozen,

    /// 未初始化
    Uninitialized,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Frozen => "frozen",
            Self::Uninitialized => "uninitialized",
        }
    }

    /// 上游显式给出的"活跃"状态值
    pub fn is_active_indicator(state: &str) -> bool {
        matches!(state, "active" | "AccountActive")
    }

    pub fn is_frozen_indicator(state: &str) -> bool {
        matches!(state, "frozen" | "AccountFrozen")
    }

    pub fn is_uninit_indicator(state: &str) -> bool {
        matches!(state, "uninit" | "uninitialized" | "AccountUninit")
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已知钱包合约接口（v1r1 ~ v4r2）
pub const WALLET_INTERFACES: [&str; 9] = [
    "wallet_v1r1",
    "wallet_v1r2",
    "wallet_v1r3",
    "wallet_v2r1",
    "wallet_v2r2",
    "wallet_v3r1",
    "wallet_v3r2",
    "wallet_v4r1",
    "wallet_v4r2",
];

static WALLET_INTERFACE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| WALLET_INTERFACES.iter().copied().collect());

/// 合约类型（仅由接口列表推断）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ContractType {
    Wallet,
    #[serde(rename = "Smart Contract")]
    SmartContract,
    Unknown,
}

impl ContractType {
    /// 接口列表缺失或为空 → Unknown；命中任一钱包接口 → Wallet；否则 SmartContract
    pub fn from_interfaces(interfaces: Option<&[Value]>) -> Self {
        let interfaces = match interfaces {
            Some(list) if !list.is_empty() => list,
            _ => return Self::Unknown,
        };

        let is_wallet = interfaces
            .iter()
            .filter_map(Value::as_str)
            .any(|iface| WALLET_INTERFACE_SET.contains(iface));

        if is_wallet {
            Self::Wallet
        } else {
            Self::SmartContract
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wallet => "Wallet",
            Self::SmartContract => "Smart Contract",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
