//! TON 余额换算
//!
//! 1 TON = 1_000_000_000 nanoton。全程使用大整数运算，
//! 非整数 TON 时保留两位小数（四舍五入，half-up），超出 2^53 的金额同样精确。

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::error::MalformedInput;

/// nanoton → TON 换算系数
pub const NANO_PER_TON: u64 = 1_000_000_000;

/// 显示单位
pub const UNIT_LABEL: &str = "TON";

const ZERO_DISPLAY: &str = "0 TON";

/// 以 nanoton 计的非负余额
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(BigUint);

impl Balance {
    /// 解析十进制 nanoton 文本；前后空白可容忍，符号位、小数点等一律视为非法
    pub fn parse(amount: &str) -> Option<Self> {
        let digits = amount.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 10).map(Self)
    }

    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }

    /// 渲染为 "N TON" 或 "N.NN TON"
    pub fn to_ton_string(&self) -> String {
        let scale = BigUint::from(NANO_PER_TON);
        let (whole, remainder) = self.0.div_rem(&scale);

        if remainder.is_zero() {
            return format!("{} {}", whole, UNIT_LABEL);
        }

        // 以 0.01 TON 为单位，加半个单位后整除实现 half-up
        let half = &scale / 2u32;
        let cents = (&self.0 * 100u32 + half) / &scale;
        let (units, fraction) = cents.div_rem(&BigUint::from(100u32));
        format!("{}.{:0>2} {}", units, fraction.to_string(), UNIT_LABEL)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ton_string())
    }
}

/// 数字字面量中指数上限，超出视为非法（避免展开出巨量的 0）
const MAX_EXPONENT: u64 = 256;

/// 把 `2500000000.0`、`2.5e9` 这类恰好为整数的 JSON 数字字面量规范化为十进制整数文本。
/// 带非零小数部分、负数或指数越界时返回 None。
pub fn integral_literal(literal: &str) -> Option<String> {
    let literal = literal.trim();
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(idx) => (&literal[..idx], literal[idx + 1..].parse::<i64>().ok()?),
        None => (literal, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let shift = exponent.checked_sub(frac_part.len() as i64)?;
    if shift.unsigned_abs() > MAX_EXPONENT {
        return None;
    }
    let mut digits = format!("{}{}", int_part, frac_part);
    if shift >= 0 {
        digits.extend(std::iter::repeat('0').take(shift as usize));
    } else {
        let keep = digits.len().checked_sub(shift.unsigned_abs() as usize)?;
        if !digits[keep..].bytes().all(|b| b == b'0') {
            return None;
        }
        digits.truncate(keep);
        if digits.is_empty() {
            digits.push('0');
        }
    }

    // 去掉前导 0
    BigUint::parse_bytes(digits.as_bytes(), 10).map(|n| n.to_string())
}

/// 余额是否为正；解析失败一律视为没有余额
pub fn has_positive_balance(amount: &str) -> bool {
    Balance::parse(amount).map_or(false, |b| b.is_positive())
}

/// 严格模式：空串或 "0" 直接返回 "0 TON"，其余非数字输入报错
pub fn format_balance(amount: &str) -> Result<String, MalformedInput> {
    if amount.is_empty() || amount == "0" {
        return Ok(ZERO_DISPLAY.to_string());
    }
    Balance::parse(amount)
        .map(|b| b.to_ton_string())
        .ok_or_else(|| MalformedInput(amount.to_string()))
}

/// 宽松模式：非数字输入按 0 处理
pub fn format_balance_or_zero(amount: &str) -> String {
    format_balance(amount).unwrap_or_else(|_| ZERO_DISPLAY.to_string())
}
