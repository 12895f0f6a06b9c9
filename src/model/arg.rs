use clap::Parser;

/// HiFiNi 每日签到工具
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 账号文件路径
    #[arg(long)]
    pub accounts: Option<String>,
}
