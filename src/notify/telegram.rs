//! Telegram 机器人推送
//!
//! Telegram 接口在部分网络环境下需要代理，代理在共享的
//! HTTP Client 上配置（见 `http_client` 模块）。

use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Telegram 机器人
pub struct TelegramNotifier {
    client: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: Client, bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Telegram 只发一段纯文本，标题拼在正文前面
    fn message_text(title: &str, body: &str) -> String {
        format!("HiFiNi签到消息: \n{}：\n{}", title, body)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, title: &str, body: &str) -> NotifyResult<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);

        let params = json!({
            "chat_id": self.chat_id,
            "text": Self::message_text(title, body),
        });

        let response = self.client.post(&url).json(&params).send().await?;

        if !response.status().is_success() {
            return Err(NotifyError::SendFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        !self.bot_token.is_empty() && !self.chat_id.is_empty()
    }

    fn name(&self) -> &'static str {
        "Telegram机器人"
    }
}
