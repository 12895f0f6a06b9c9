//! 账号信息与批量加载
//!
//! 账号列表是一个 JSON 数组，优先从 `ACCOUNTS` 环境变量读取，
//! 其次从账号文件读取；也兼容旧版的 `{"info":[...]}` 包装格式。

use crate::model::config::{AccountsSource, Config};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 账号信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// 显示名称
    pub name: String,
    /// 浏览器导出的原始 Cookie
    pub cookie: String,
    /// 签到接口需要的 sign 令牌
    pub sign: String,
}

/// 旧版包装格式，账号数组挂在 `info` 键下
#[derive(Deserialize)]
struct LegacyWrapper {
    info: Vec<Account>,
}

impl Account {
    /// 从 JSON 字符串解析账号列表
    ///
    /// 接受裸数组和旧版 `{"info":[...]}` 两种格式
    pub fn parse_batch(json: &str) -> anyhow::Result<Vec<Account>> {
        if let Ok(accounts) = serde_json::from_str::<Vec<Account>>(json) {
            return Ok(accounts);
        }
        let wrapper: LegacyWrapper = serde_json::from_str(json)?;
        Ok(wrapper.info)
    }

    /// 从 ACCOUNTS 环境变量加载账号列表
    pub fn from_env() -> Option<anyhow::Result<Vec<Account>>> {
        let json = env::var("ACCOUNTS").ok()?;
        if json.trim().is_empty() {
            return None;
        }
        Some(Self::parse_batch(&json))
    }

    /// 从文件加载账号列表
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Account>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("读取账号文件 {:?} 失败: {}", path, e))?;
        if content.trim().is_empty() {
            anyhow::bail!("账号文件为空: {:?}", path);
        }
        Self::parse_batch(&content)
    }

    /// 按配置加载账号列表
    ///
    /// 未指定来源时优先环境变量，回退到文件。
    /// 账号列表为空视为配置错误。
    pub fn load_batch(config: &Config) -> anyhow::Result<Vec<Account>> {
        let accounts = match config.accounts_source {
            Some(AccountsSource::Env) => Self::from_env()
                .ok_or_else(|| anyhow::anyhow!("未设置 ACCOUNTS 环境变量"))??,
            Some(AccountsSource::File) => Self::load(&config.accounts_file)?,
            None => {
                if let Some(result) = Self::from_env() {
                    tracing::info!("从环境变量加载账号");
                    result?
                } else {
                    Self::load(&config.accounts_file)?
                }
            }
        };

        if accounts.is_empty() {
            anyhow::bail!("未配置任何账号");
        }
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"name": "甲", "cookie": "bbs_sid=a;bbs_token=b", "sign": "s1"},
            {"name": "乙", "cookie": "bbs_sid=c;bbs_token=d", "sign": "s2"}
        ]"#;

        let accounts = Account::parse_batch(json).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "甲");
        assert_eq!(accounts[1].sign, "s2");
    }

    #[test]
    fn test_parse_legacy_wrapper() {
        let json = r#"{"info": [{"name": "甲", "cookie": "c", "sign": "s"}]}"#;

        let accounts = Account::parse_batch(json).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].cookie, "c");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Account::parse_batch("not json").is_err());
        assert!(Account::parse_batch(r#"{"users": []}"#).is_err());
    }

    #[test]
    fn test_parse_empty_array() {
        let accounts = Account::parse_batch("[]").unwrap();
        assert!(accounts.is_empty());
    }
}
