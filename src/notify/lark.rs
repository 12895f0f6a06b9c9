//! 飞书机器人推送

use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const WEBHOOK_BASE: &str = "https://open.feishu.cn/open-apis/bot/v2/hook/";

/// 飞书机器人
pub struct LarkNotifier {
    client: Client,
    key: String,
}

impl LarkNotifier {
    pub fn new(client: Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }

    /// 文本消息体，标题和正文拼成一段
    fn payload(title: &str, body: &str) -> serde_json::Value {
        json!({
            "msg_type": "text",
            "content": {
                "text": format!("{}\n{}", title, body),
            },
        })
    }
}

#[async_trait]
impl Notifier for LarkNotifier {
    async fn send(&self, title: &str, body: &str) -> NotifyResult<()> {
        let url = format!("{}{}", WEBHOOK_BASE, self.key);

        let response = self
            .client
            .post(&url)
            .json(&Self::payload(title, body))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::SendFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        !self.key.is_empty()
    }

    fn name(&self) -> &'static str {
        "飞书机器人"
    }
}
