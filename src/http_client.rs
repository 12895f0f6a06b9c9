//! HTTP Client 构建模块
//!
//! 签到请求和所有推送渠道共用同一个 Client，支持代理配置。
//! Telegram 接口在部分网络环境下无法直连，需要走代理。

use crate::model::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// 连接/读/写超时，与签到接口的调用约定一致
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 代理配置
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// 代理地址，支持 http/https/socks5
    pub url: String,
    /// 代理认证用户名
    pub username: Option<String>,
    /// 代理认证密码
    pub password: Option<String>,
}

impl ProxyConfig {
    /// 从应用配置提取代理配置，未配置代理时返回 None
    pub fn from_config(config: &Config) -> Option<Self> {
        let url = config.proxy_url.clone()?;
        Some(Self {
            url,
            username: config.proxy_username.clone(),
            password: config.proxy_password.clone(),
        })
    }
}

/// 构建 HTTP Client
///
/// # Arguments
/// * `proxy` - 可选的代理配置
///
/// # Returns
/// 配置好 30 秒超时的 reqwest::Client
pub fn build_client(proxy: Option<&ProxyConfig>) -> anyhow::Result<Client> {
    let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(&proxy_config.url)?;

        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password) {
            proxy = proxy.basic_auth(username, password);
        }

        builder = builder.proxy(proxy);
        tracing::debug!("HTTP Client 使用代理: {}", proxy_config.url);
    }

    Ok(builder.build()?)
}
