//! 推送渠道模块
//!
//! 每个渠道一个 [`Notifier`] 实现，签到报告生成后依次推送到
//! 所有启用的渠道。单个渠道失败只记日志，不影响其他渠道，
//! 也不影响整体流程。
//!
//! # 支持的渠道
//! - 钉钉机器人
//! - 企业微信机器人
//! - Server酱
//! - 飞书机器人
//! - Telegram 机器人

pub mod dingtalk;
pub mod lark;
pub mod server_chan;
pub mod telegram;
pub mod wecom;

pub use dingtalk::DingTalkNotifier;
pub use lark::LarkNotifier;
pub use server_chan::ServerChanNotifier;
pub use telegram::TelegramNotifier;
pub use wecom::WeComNotifier;

use crate::model::config::Config;
use async_trait::async_trait;
use reqwest::Client;

/// 推送操作的 Result 类型
pub type NotifyResult<T> = Result<T, NotifyError>;

/// 推送错误
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("推送失败: {0}")]
    SendFailed(String),

    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 推送渠道接口
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 推送一条消息
    async fn send(&self, title: &str, body: &str) -> NotifyResult<()>;

    /// 渠道是否配置完整
    fn is_enabled(&self) -> bool;

    /// 渠道名称，用于日志
    fn name(&self) -> &'static str;
}

/// 按配置构建所有推送渠道
///
/// 凭证缺失的渠道不会被构建；所有渠道共用同一个 [`Client`]
pub fn build_notifiers(config: &Config, client: &Client) -> Vec<Box<dyn Notifier>> {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

    if let Some(key) = &config.server_chan_key {
        notifiers.push(Box::new(ServerChanNotifier::new(client.clone(), key.clone())));
    }
    if let Some(key) = &config.wxwork_webhook {
        notifiers.push(Box::new(WeComNotifier::new(client.clone(), key.clone())));
    }
    if let Some(key) = &config.lark_key {
        notifiers.push(Box::new(LarkNotifier::new(client.clone(), key.clone())));
    }
    if let Some(token) = &config.dingtalk_webhook {
        notifiers.push(Box::new(DingTalkNotifier::new(client.clone(), token.clone())));
    }
    if let (Some(token), Some(chat_id)) = (&config.tg_bot_token, &config.tg_chat_id) {
        notifiers.push(Box::new(TelegramNotifier::new(
            client.clone(),
            token.clone(),
            chat_id.clone(),
        )));
    }

    notifiers
}

/// 依次推送到所有启用的渠道
///
/// 渠道之间相互独立，失败只记日志
pub async fn publish(notifiers: &[Box<dyn Notifier>], title: &str, body: &str) {
    for notifier in notifiers {
        if !notifier.is_enabled() {
            tracing::debug!("{} 未配置，跳过", notifier.name());
            continue;
        }
        match notifier.send(title, body).await {
            Ok(()) => tracing::info!("{} 消息发送成功", notifier.name()),
            Err(e) => tracing::error!("{} 消息发送失败: {}", notifier.name(), e),
        }
    }
}
