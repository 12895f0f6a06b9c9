//! 企业微信机器人推送

use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const WEBHOOK_BASE: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=";

/// 企业微信机器人
pub struct WeComNotifier {
    client: Client,
    key: String,
}

impl WeComNotifier {
    pub fn new(client: Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }

    /// markdown 消息体
    fn payload(title: &str, body: &str) -> serde_json::Value {
        json!({
            "msgtype": "markdown",
            "markdown": {
                "content": format!("**{}**\n{}", title, body),
            },
        })
    }
}

#[async_trait]
impl Notifier for WeComNotifier {
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
        "企业微信机器人"
    }
}
