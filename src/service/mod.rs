pub mod account_inspector;
pub mod tonapi_client;

pub use account_inspector::{AccountInspector, AccountReport};
pub use tonapi_client::{AccountSource, TonApiClient};
