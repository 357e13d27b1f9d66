//! 领域错误定义
//! 只有两类真正的失败：上游传输失败、余额字符串非法；其余字段异常由分类器吸收

use thiserror::Error;

/// 上游 TonAPI 请求失败
#[derive(Debug, Error)]
pub enum TransportError {
    /// 非 2xx 响应
    #[error("API returned status {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// 响应体不是合法 JSON
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl TransportError {
    /// 上游返回的 HTTP 状态码（网络层失败时为 None）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Network(e) | Self::Decode(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// 余额不是十进制非负整数
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid balance amount: {0:?}")]
pub struct MalformedInput(pub String);

/// 一次账户查询可能出现的全部错误
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Please enter a TON address")]
    EmptyAddress,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
}
