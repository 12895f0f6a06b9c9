//! HiFiNi 每日签到工具
//!
//! 读取账号配置，按并发上限批量调用签到接口，
//! 把汇总结果推送到所有配置的渠道。

mod hifini;
mod http_client;
mod model;
mod notify;
mod report;
mod runner;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::hifini::{Account, HifiniClient};
use crate::http_client::{build_client, ProxyConfig};
use crate::model::arg::Args;
use crate::model::config::{AccountsSource, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    config.override_from_env();
    if let Some(path) = args.accounts {
        config.accounts_file = path;
        config.accounts_source = Some(AccountsSource::File);
    }

    // 账号缺失是配置错误，直接终止
    let accounts = Account::load_batch(&config)?;

    let proxy = ProxyConfig::from_config(&config);
    let client = build_client(proxy.as_ref())?;

    let service = Arc::new(HifiniClient::new(client.clone(), config.sign_url.clone()));
    let report = runner::run_batch(service, accounts).await;

    tracing::info!("\nHiFiNi签到消息: \n{}：\n{}", report.title(), report.body());

    let notifiers = notify::build_notifiers(&config, &client);
    if notifiers.is_empty() {
        tracing::info!("未配置任何推送渠道");
    } else {
        notify::publish(&notifiers, report.title(), &report.body()).await;
    }

    Ok(())
}
