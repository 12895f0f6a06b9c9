//! 钉钉机器人推送

use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const WEBHOOK_BASE: &str = "https://oapi.dingtalk.com/robot/send?access_token=";

/// 钉钉机器人
pub struct DingTalkNotifier {
    client: Client,
    access_token: String,
}

impl DingTalkNotifier {
    pub fn new(client: Client, access_token: impl Into<String>) -> Self {
        Self {
            client,
            access_token: access_token.into(),
        }
    }

    /// markdown 消息体
    fn payload(title: &str, body: &str) -> serde_json::Value {
        json!({
            "msgtype": "markdown",
            "markdown": {
                "title": title,
                "text": format!("### {}\n\n{}", title, body),
            },
        })
    }
}

#[async_trait]
impl Notifier for DingTalkNotifier {
    async fn send(&self, title: &str, body: &str) -> NotifyResult<()> {
        let url = format!("{}{}", WEBHOOK_BASE, self.access_token);

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
        !self.access_token.is_empty()
    }

    fn name(&self) -> &'static str {
        "钉钉机器人"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = DingTalkNotifier::payload("HiFiNi签到失败", "正文");
        assert_eq!(payload["msgtype"], "markdown");
        assert_eq!(payload["markdown"]["title"], "HiFiNi签到失败");
        assert_eq!(payload["markdown"]["text"], "### HiFiNi签到失败\n\n正文");
    }
}
