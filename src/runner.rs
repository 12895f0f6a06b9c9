//! 批量签到执行器
//!
//! 每个账号一个任务，信号量限制并发为 5；所有任务结束后
//! 汇总成一份 [`Report`]。单个账号失败不影响其他账号，
//! 每个账号必定在报告中留下一条结果。

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::hifini::account::Account;
use crate::hifini::cookie::SessionCookie;
use crate::hifini::response::SignResponse;
use crate::http_client::REQUEST_TIMEOUT;
use crate::report::{CheckInResult, Report};

/// 同时执行签到请求的任务数上限
const MAX_CONCURRENCY: usize = 5;

/// 放弃剩余任务前的宽限时间
///
/// 只要还有任务在跑，相邻两次任务完成的间隔不会超过
/// 请求超时；超出请求超时加宽限仍无任务完成，说明有任务卡死
const SHUTDOWN_GRACE: Duration = Duration::from_secs(20);

/// 签到服务接口
///
/// 生产实现是 [`crate::hifini::HifiniClient`]，测试用探针实现替换
#[async_trait]
pub trait SignService: Send + Sync + 'static {
    async fn check_in(&self, cookie: &SessionCookie, sign: &str) -> anyhow::Result<SignResponse>;
}

/// 批量执行签到，返回汇总报告
///
/// Cookie 解析失败的账号不发请求，直接记一条失败结果；
/// 请求失败的账号记 401 失败结果，报告中不会出现缺口。
pub async fn run_batch<S: SignService>(service: Arc<S>, accounts: Vec<Account>) -> Report {
    tracing::info!("检测到 {} 个账号", accounts.len());

    let results: Arc<Mutex<Vec<CheckInResult>>> = Arc::new(Mutex::new(Vec::new()));
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENCY));
    let mut tasks = JoinSet::new();

    for (index, account) in accounts.into_iter().enumerate() {
        let Some(cookie) = SessionCookie::parse(account.cookie.trim()) else {
            tracing::warn!("解析第 {} 个cookie失败", index + 1);
            results
                .lock()
                .expect("结果列表锁中毒")
                .push(CheckInResult::parse_failure(account.name));
            continue;
        };
        tracing::info!("成功解析第 {} 个cookie", index + 1);

        let service = service.clone();
        let semaphore = semaphore.clone();
        let results = results.clone();
        tasks.spawn(async move {
            // 信号量不会被关闭，acquire 不会失败
            let _permit = semaphore.acquire_owned().await.expect("信号量已关闭");

            let started = Instant::now();
            let outcome = service.check_in(&cookie, &account.sign).await;
            let elapsed = started.elapsed().as_millis() as u64;

            let result = match outcome {
                Ok(resp) => CheckInResult::new(account.name, resp.code, resp.message, elapsed),
                Err(e) => {
                    tracing::warn!("账号 {} 签到请求失败: {}", account.name, e);
                    CheckInResult::request_failure(account.name, elapsed)
                }
            };
            results.lock().expect("结果列表锁中毒").push(result);
        });
    }

    // join-all：等待所有任务完成，超过宽限仍无进展则放弃剩余任务
    let drain_step = REQUEST_TIMEOUT + SHUTDOWN_GRACE;
    while !tasks.is_empty() {
        let next = tokio::time::timeout(drain_step, tasks.join_next()).await;
        match next {
            Ok(Some(Ok(()))) => {}
            Ok(Some(Err(e))) => tracing::error!("签到任务异常退出: {}", e),
            Ok(None) => break,
            Err(_) => {
                tracing::warn!("等待签到任务超时，放弃剩余 {} 个任务", tasks.len());
                tasks.abort_all();
                break;
            }
        }
    }

    let collected = {
        let mut guard = results.lock().expect("结果列表锁中毒");
        std::mem::take(&mut *guard)
    };
    Report::new(collected)
}
