//! TON Account Inspector
//!
//! 查询 TonAPI 单个账户，输出规范化摘要：状态、余额、合约类型、最近活跃时间

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod presenter;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use app_state::AppState;
pub use error::{AppError, AppErrorCode};

pub mod prelude {
    pub use crate::{
        app_state::AppState,
        domain::{
            classify, format_balance, AccountInspection, AccountStatus, ContractType,
            InspectError, RawAccountRecord,
        },
        presenter::{AccountSummary, AccountView},
        service::{AccountInspector, AccountSource, TonApiClient},
    };
}
