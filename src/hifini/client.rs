//! 签到 HTTP 客户端

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use reqwest::Client;

use crate::hifini::cookie::SessionCookie;
use crate::hifini::response::SignResponse;
use crate::runner::SignService;

/// 固定 User-Agent，与站点校验保持一致
const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// HiFiNi 签到客户端
///
/// 所有账号的签到请求共用同一个 [`Client`]（复用连接池）
pub struct HifiniClient {
    client: Client,
    sign_url: String,
}

impl HifiniClient {
    pub fn new(client: Client, sign_url: impl Into<String>) -> Self {
        Self {
            client,
            sign_url: sign_url.into(),
        }
    }

    /// 构建签到请求头
    fn build_headers(cookie: &SessionCookie) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&cookie.header_value())?);
        headers.insert(USER_AGENT, HeaderValue::from_static(UA));
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        Ok(headers)
    }
}

#[async_trait]
impl SignService for HifiniClient {
    /// 发送一次签到请求
    ///
    /// 非 2xx 响应和无法解析的响应体都按失败处理
    async fn check_in(&self, cookie: &SessionCookie, sign: &str) -> anyhow::Result<SignResponse> {
        let headers = Self::build_headers(cookie)?;

        let response = self
            .client
            .post(&self.sign_url)
            .headers(headers)
            .form(&[("sign", sign)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("签到接口返回异常状态: {}", status);
        }

        let body = response.text().await?;
        let parsed: SignResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("解析签到响应失败: {} (body: {})", e, body))?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie() -> SessionCookie {
        SessionCookie::parse("bbs_sid=abc;bbs_token=xyz").unwrap()
    }

    #[tokio::test]
    async fn test_check_in_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/sg_sign.htm")
            .match_header("x-requested-with", "XMLHttpRequest")
            .match_header("cookie", "bbs_sid=abc;bbs_token=xyz;")
            .match_body("sign=token1")
            .with_status(200)
            .with_body(r#"{"code": 0, "message": "成功签到,经验+5,金币+1"}"#)
            .create_async()
            .await;

        let client = HifiniClient::new(Client::new(), format!("{}/sg_sign.htm", server.url()));
        let resp = client.check_in(&cookie(), "token1").await.unwrap();

        assert_eq!(resp.code, 0);
        assert_eq!(resp.message, "成功签到,经验+5,金币+1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_in_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/sg_sign.htm")
            .with_status(503)
            .create_async()
            .await;

        let client = HifiniClient::new(Client::new(), format!("{}/sg_sign.htm", server.url()));
        let err = client.check_in(&cookie(), "t").await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_check_in_bad_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/sg_sign.htm")
            .with_status(200)
            .with_body("<html>WAF</html>")
            .create_async()
            .await;

        let client = HifiniClient::new(Client::new(), format!("{}/sg_sign.htm", server.url()));
        assert!(client.check_in(&cookie(), "t").await.is_err());
    }
}
