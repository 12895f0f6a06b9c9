//! 会话 Cookie 解析
//!
//! 签到接口只认 `bbs_sid` 和 `bbs_token` 两项，
//! 浏览器导出的原始 Cookie 里通常还混着别的键。

/// 解析后的会话 Cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    sid: String,
    token: String,
}

impl SessionCookie {
    /// 从原始 Cookie 字符串解析
    ///
    /// 按 `;` 分割，逐项去除首尾空白后做前缀匹配，
    /// `bbs_sid` 和 `bbs_token` 缺一不可。
    pub fn parse(raw: &str) -> Option<Self> {
        let mut sid = None;
        let mut token = None;

        for item in raw.split(';') {
            let item = item.trim();
            if let Some(value) = item.strip_prefix("bbs_sid=") {
                sid = Some(value.to_string());
            } else if let Some(value) = item.strip_prefix("bbs_token=") {
                token = Some(value.to_string());
            }
        }

        Some(Self {
            sid: sid?,
            token: token?,
        })
    }

    /// 重组为请求头中的 Cookie 值
    pub fn header_value(&self) -> String {
        format!("bbs_sid={};bbs_token={};", self.sid, self.token)
    }
}
