//! TonAPI 账户原始记录
//!
//! 上游字段命名在不同接口版本之间并不统一，同一个语义可能出现在多个 key 上，
//! 也可能嵌套在 `account` / `info` 之下。这里用具名访问器逐个探测候选字段，
//! 并按固定优先级组合，避免在业务代码里做动态字段查找。
//!
//! 探测规则沿用上游 JSON 的"真值"语义：`null`、`false`、`0`、`""` 视为缺失。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::balance::integral_literal;

/// 空 cell 的 BOC（未部署合约时部分接口会返回它），不算作代码/数据
pub const EMPTY_CELL_BOC: &str = "te6cckEBAQEAOwAA";

/// 未解析出任何余额字段时的默认值
pub const DEFAULT_BALANCE: &str = "0";

/// 上游原始账户记录（弱类型）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAccountRecord(Value);

/// 按 JSON 真值语义过滤
fn truthy(value: &Value) -> Option<&Value> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        // 超出 f64 范围的大整数 as_f64 为 None，按非零处理
        Value::Number(n) if n.as_f64().map_or(false, |f| f == 0.0) => None,
        _ => Some(value),
    }
}

/// 字符串/数组非空视为有内容
fn has_length(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

/// 余额字段渲染为十进制文本（数字按原样保留精度）
///
/// 数字字面量写成 `2500000000.0` / `2.5e9` 但数值恰为整数时，规范化为整数文本；
/// 真正带小数的数字保留原文，交由格式化阶段判定为非法。
fn amount_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            let literal = n.to_string();
            if n.is_u64() || n.is_i64() {
                return literal;
            }
            integral_literal(&literal).unwrap_or(literal)
        }
        other => other.to_string(),
    }
}

impl RawAccountRecord {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).and_then(truthy)
    }

    fn nested(&self, outer: &str, key: &str) -> Option<&Value> {
        self.0
            .get(outer)
            .and_then(|o| o.get(key))
            .and_then(truthy)
    }

    // ---- 状态字段 ----

    pub fn state(&self) -> Option<&Value> {
        self.field("state")
    }

    pub fn status(&self) -> Option<&Value> {
        self.field("status")
    }

    pub fn account_state(&self) -> Option<&Value> {
        self.field("account_state")
    }

    pub fn lifecycle_state(&self) -> Option<&Value> {
        self.field("lifecycle_state")
    }

    pub fn info_state(&self) -> Option<&Value> {
        self.nested("info", "state")
    }

    pub fn nested_account_state(&self) -> Option<&Value> {
        self.nested("account", "state")
    }

    /// 状态指示字段，优先级：
    /// `state` > `status` > `account_state` > `lifecycle_state` > `info.state` > `account.state`
    ///
    /// 非字符串的真值也算"存在"，只是不会匹配任何已知状态。
    pub fn state_indicator(&self) -> Option<&Value> {
        self.state()
            .or_else(|| self.status())
            .or_else(|| self.account_state())
            .or_else(|| self.lifecycle_state())
            .or_else(|| self.info_state())
            .or_else(|| self.nested_account_state())
    }

    // ---- 代码/数据字段 ----

    pub fn code(&self) -> Option<&Value> {
        self.field("code")
    }

    pub fn account_code(&self) -> Option<&Value> {
        self.nested("account", "code")
    }

    pub fn code_hash(&self) -> Option<&Value> {
        self.field("code_hash")
    }

    pub fn data(&self) -> Option<&Value> {
        self.field("data")
    }

    pub fn account_data(&self) -> Option<&Value> {
        self.nested("account", "data")
    }

    pub fn data_hash(&self) -> Option<&Value> {
        self.field("data_hash")
    }

    /// 是否部署了代码
    pub fn has_code(&self) -> bool {
        Self::payload_present(self.code(), self.account_code(), self.code_hash())
    }

    /// 是否存在持久化数据
    pub fn has_data(&self) -> bool {
        Self::payload_present(self.data(), self.account_data(), self.data_hash())
    }

    /// 顶层负载需排除空 cell；嵌套负载只看长度；hash 排除 "0"
    fn payload_present(top: Option<&Value>, nested: Option<&Value>, hash: Option<&Value>) -> bool {
        let top = top.map_or(false, |v| has_length(v) && v.as_str() != Some(EMPTY_CELL_BOC));
        let nested = nested.map_or(false, has_length);
        let hash = hash.map_or(false, |v| v.as_str() != Some("0"));
        top || nested || hash
    }

    // ---- 余额字段 ----

    pub fn balance(&self) -> Option<&Value> {
        self.field("balance")
    }

    pub fn balance_raw(&self) -> Option<&Value> {
        self.field("balance_raw")
    }

    pub fn account_balance(&self) -> Option<&Value> {
        self.nested("account", "balance")
    }

    /// `balances[0].value`
    pub fn first_balances_value(&self) -> Option<&Value> {
        self.0
            .get("balances")
            .and_then(|b| b.get(0))
            .and_then(|first| first.get("value"))
            .and_then(truthy)
    }

    /// 解析有效余额（nanoton 文本），优先级：
    /// `balance` > `balance_raw` > `account.balance` > `balances[0].value`，缺省 `"0"`
    pub fn resolve_balance(&self) -> String {
        self.balance()
            .or_else(|| self.balance_raw())
            .or_else(|| self.account_balance())
            .or_else(|| self.first_balances_value())
            .map(amount_text)
            .unwrap_or_else(|| DEFAULT_BALANCE.to_string())
    }

    // ---- 其他 ----

    /// 接口标识列表（非数组视为缺失）
    pub fn interfaces(&self) -> Option<&[Value]> {
        self.0
            .get("interfaces")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// 最近活跃时间（Unix 秒），接受整数或数字字符串
    pub fn last_activity(&self) -> Option<i64> {
        let ts = match self.field("last_activity")? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        ts.filter(|ts| *ts != 0)
    }
}

impl From<Value> for RawAccountRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
