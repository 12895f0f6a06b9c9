use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 账号来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountsSource {
    /// 从 ACCOUNTS 环境变量读取
    Env,
    /// 从账号文件读取
    File,
}

/// 应用配置
///
/// 所有字段都可以通过环境变量覆盖，见 [`Config::override_from_env`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 账号来源（不设置时：环境变量存在则用环境变量，否则读文件）
    #[serde(default)]
    pub accounts_source: Option<AccountsSource>,

    #[serde(default = "default_accounts_file")]
    pub accounts_file: String,

    /// 签到接口地址
    #[serde(default = "default_sign_url")]
    pub sign_url: String,

    /// 钉钉机器人 access_token
    #[serde(default)]
    pub dingtalk_webhook: Option<String>,

    /// 企业微信机器人 key
    #[serde(default)]
    pub wxwork_webhook: Option<String>,

    /// Server酱推送 key
    #[serde(default)]
    pub server_chan_key: Option<String>,

    /// 飞书机器人 key
    #[serde(default)]
    pub lark_key: Option<String>,

    /// Telegram Bot Token
    #[serde(default)]
    pub tg_bot_token: Option<String>,

    /// Telegram Chat ID
    #[serde(default)]
    pub tg_chat_id: Option<String>,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// 代理认证用户名（可选）
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// 代理认证密码（可选）
    #[serde(default)]
    pub proxy_password: Option<String>,
}

impl Config {
    /// 从环境变量覆盖配置
    ///
    /// 推送渠道的变量名与旧版保持一致
    pub fn override_from_env(&mut self) {
        if let Ok(source) = env::var("ACCOUNTS_SOURCE") {
            match source.to_lowercase().as_str() {
                "env" => self.accounts_source = Some(AccountsSource::Env),
                "file" => self.accounts_source = Some(AccountsSource::File),
                other => tracing::warn!("忽略无效的 ACCOUNTS_SOURCE: {}", other),
            }
        }
        if let Ok(path) = env::var("ACCOUNTS_FILE") {
            self.accounts_file = path;
        }
        if let Ok(url) = env::var("SIGN_URL") {
            self.sign_url = url;
        }
        if let Ok(token) = env::var("DINGTALK_WEBHOOK") {
            self.dingtalk_webhook = Some(token);
        }
        if let Ok(key) = env::var("WXWORK_WEBHOOK") {
            self.wxwork_webhook = Some(key);
        }
        if let Ok(key) = env::var("SERVER_CHAN") {
            self.server_chan_key = Some(key);
        }
        if let Ok(key) = env::var("LARK_KEY") {
            self.lark_key = Some(key);
        }
        if let Ok(token) = env::var("TG_BOT_TOKEN") {
            self.tg_bot_token = Some(token);
        }
        if let Ok(id) = env::var("TG_CHAT_ID") {
            self.tg_chat_id = Some(id);
        }
        if let Ok(proxy) = env::var("PROXY_URL") {
            self.proxy_url = Some(proxy);
        }
        if let Ok(username) = env::var("PROXY_USERNAME") {
            self.proxy_username = Some(username);
        }
        if let Ok(password) = env::var("PROXY_PASSWORD") {
            self.proxy_password = Some(password);
        }
    }
}

fn default_accounts_file() -> String {
    "accounts.json".to_string()
}

fn default_sign_url() -> String {
    "https://www.hifini.com/sg_sign.htm".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts_source: None,
            accounts_file: default_accounts_file(),
            sign_url: default_sign_url(),
            dingtalk_webhook: None,
            wxwork_webhook: None,
            server_chan_key: None,
            lark_key: None,
            tg_bot_token: None,
            tg_chat_id: None,
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.accounts_file, "accounts.json");
        assert_eq!(config.sign_url, "https://www.hifini.com/sg_sign.htm");
        assert!(config.accounts_source.is_none());
        assert!(config.dingtalk_webhook.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "accountsSource": "file",
            "accountsFile": "users.json",
            "larkKey": "abc",
            "unknownField": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.accounts_source, Some(AccountsSource::File));
        assert_eq!(config.accounts_file, "users.json");
        assert_eq!(config.lark_key, Some("abc".to_string()));
        // 未设置的字段回落到默认值
        assert_eq!(config.sign_url, "https://www.hifini.com/sg_sign.htm");
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load("no_such_config.json").unwrap();
        assert_eq!(config.accounts_file, "accounts.json");
    }
}
