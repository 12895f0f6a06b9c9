//! HiFiNi 签到模块
//!
//! 包含与 HiFiNi 站点交互的全部类型：
//! - `account`: 账号信息与批量加载
//! - `cookie`: 会话 Cookie 解析
//! - `response`: 签到接口响应模型
//! - `client`: 签到 HTTP 客户端

pub mod account;
pub mod client;
pub mod cookie;
pub mod response;

pub use account::Account;
pub use client::HifiniClient;
pub use cookie::SessionCookie;
pub use response::SignResponse;
