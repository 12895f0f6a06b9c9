//! 签到结果汇总
//!
//! 每个账号对应一条 [`CheckInResult`]，全部任务结束后汇总成 [`Report`]，
//! 作为推送消息的内容来源。

use serde::Serialize;

/// 判定为签到成功的消息标记
const SUCCESS_MARKERS: [&str; 2] = ["成功签到", "今天已经签过啦！"];

/// 单个账号的签到结果
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResult {
    pub user_name: String,
    pub code: i64,
    pub message: String,
    pub duration_ms: u64,
}

impl CheckInResult {
    pub fn new(
        user_name: impl Into<String>,
        code: i64,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            code,
            message: message.into(),
            duration_ms,
        }
    }

    /// 请求异常（网络错误、超时、响应异常）时的兜底结果
    pub fn request_failure(user_name: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(user_name, 401, "签到失败,cookie失效", duration_ms)
    }

    /// Cookie 解析失败时的兜底结果，不发请求所以耗时为 0
    pub fn parse_failure(user_name: impl Into<String>) -> Self {
        Self::new(user_name, 401, "签到失败,cookie解析失败", 0)
    }

    /// 消息中带成功标记才算签到成功
    pub fn is_success(&self) -> bool {
        SUCCESS_MARKERS.iter().any(|m| self.message.contains(m))
    }
}

/// 本次批量签到的汇总报告
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<CheckInResult>,
}

impl Report {
    pub fn new(results: Vec<CheckInResult>) -> Self {
        Self { results }
    }

    /// 所有账号都成功（或今天已签过）才算整体成功
    pub fn all_success(&self) -> bool {
        self.results.iter().all(CheckInResult::is_success)
    }

    /// 推送标题
    pub fn title(&self) -> &'static str {
        if self.all_success() {
            "HiFiNi签到成功"
        } else {
            "HiFiNi签到失败"
        }
    }

    /// 推送正文，每个账号一段
    pub fn body(&self) -> String {
        let mut body = String::new();
        for result in &self.results {
            body.push_str(&format!(
                "{}: \n签到结果: {}\n耗时: {}ms\n\n",
                result.user_name, result.message, result.duration_ms
            ));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_markers() {
        let signed = CheckInResult::new("甲", 0, "成功签到,经验+5,金币+1", 120);
        let already = CheckInResult::new("乙", 0, "今天已经签过啦！", 80);
        let failed = CheckInResult::request_failure("丙", 30000);

        assert!(signed.is_success());
        assert!(already.is_success());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_all_success_title() {
        let report = Report::new(vec![
            CheckInResult::new("甲", 0, "成功签到", 100),
            CheckInResult::new("乙", 0, "今天已经签过啦！", 90),
        ]);
        assert!(report.all_success());
        assert_eq!(report.title(), "HiFiNi签到成功");
    }

    #[test]
    fn test_any_failure_title() {
        let report = Report::new(vec![
            CheckInResult::new("甲", 0, "成功签到", 100),
            CheckInResult::parse_failure("乙"),
        ]);
        assert!(!report.all_success());
        assert_eq!(report.title(), "HiFiNi签到失败");
    }

    #[test]
    fn test_empty_report_is_success() {
        // 空报告没有失败项，标题按成功处理
        let report = Report::new(Vec::new());
        assert!(report.all_success());
    }

    #[test]
    fn test_body_format() {
        let report = Report::new(vec![CheckInResult::new("甲", 0, "成功签到", 123)]);
        assert_eq!(report.body(), "甲: \n签到结果: 成功签到\n耗时: 123ms\n\n");
    }

    #[test]
    fn test_parse_failure_has_zero_duration() {
        let result = CheckInResult::parse_failure("甲");
        assert_eq!(result.duration_ms, 0);
        assert_eq!(result.code, 401);
    }
}
