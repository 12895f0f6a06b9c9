//! Server酱推送（微信公众号）

use super::{Notifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;

/// Server酱
pub struct ServerChanNotifier {
    client: Client,
    key: String,
}

impl ServerChanNotifier {
    pub fn new(client: Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }

    fn url(&self) -> String {
        format!("https://sctapi.ftqq.com/{}.send", self.key)
    }
}

#[async_trait]
impl Notifier for ServerChanNotifier {
    /// Server酱用表单提交，title 是标题，desp 是正文
    async fn send(&self, title: &str, body: &str) -> NotifyResult<()> {
        let response = self
            .client
            .post(self.url())
            .form(&[("title", title), ("desp", body)])
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
        "Server酱"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let notifier = ServerChanNotifier::new(Client::new(), "SCT123");
        assert_eq!(notifier.url(), "https://sctapi.ftqq.com/SCT123.send");
    }
}
