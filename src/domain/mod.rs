//! Domain 模块
//!
//! 纯函数核心：原始记录探测、状态分类、余额换算。不依赖网络与展示层。

pub mod account_record;
pub mod account_status;
pub mod balance;
pub mod classifier;
pub mod error;
pub mod inspection;

// 重新导出常用类型
pub use account_record::RawAccountRecord;
pub use account_status::{AccountStatus, ContractType};
pub use balance::{format_balance, format_balance_or_zero, Balance};
pub use classifier::{classify, AccountEvidence};
pub use error::{InspectError, MalformedInput, TransportError};
pub use inspection::AccountInspection;
