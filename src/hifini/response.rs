//! 签到接口响应模型

use serde::{Deserialize, Deserializer, Serialize};

/// 签到接口响应
///
/// 站点在不同路径下会把 code 返回成数字或数字字符串，
/// 反序列化时两种都接受。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignResponse {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(i64),
        Text(String),
    }

    match Code::deserialize(deserializer)? {
        Code::Number(n) => Ok(n),
        Code::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code() {
        let resp: SignResponse =
            serde_json::from_str(r#"{"code": 0, "message": "成功签到,经验+5"}"#).unwrap();
        assert_eq!(resp.code, 0);
        assert_eq!(resp.message, "成功签到,经验+5");
    }

    #[test]
    fn test_string_code() {
        let resp: SignResponse =
            serde_json::from_str(r#"{"code": "0", "message": "今天已经签过啦！"}"#).unwrap();
        assert_eq!(resp.code, 0);
    }

    #[test]
    fn test_missing_fields() {
        let resp: SignResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.code, 0);
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_non_numeric_code() {
        assert!(serde_json::from_str::<SignResponse>(r#"{"code": "abc"}"#).is_err());
    }
}
