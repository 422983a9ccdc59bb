//! browsercheck 命令行入口
//! 输入 User-Agent（可附带插件版本串），输出过期应用的 JSON 数组

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use browsercheck::{
    BrowserChecker, ComparisonPolicy, ConfigManager, to_compact_json, to_pretty_json,
};

#[derive(Parser, Debug)]
#[command(name = "browsercheck", version, about = "检测 User-Agent 中的过期浏览器、系统与插件")]
struct Cli {
    /// 待检测的 User-Agent，缺省时从标准输入读取
    #[arg(short, long)]
    user_agent: Option<String>,

    /// 插件版本串，直接拼接在 User-Agent 之后
    #[arg(short, long)]
    plugins: Option<String>,

    /// 版本比较策略：final-component / lexicographic
    #[arg(long, default_value = "final-component")]
    policy: ComparisonPolicy,

    /// 仅输出名称与更新地址
    #[arg(long)]
    lite: bool,

    /// 格式化输出
    #[arg(long)]
    pretty: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let user_agent = match cli.user_agent {
        Some(ua) => ua,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取标准输入失败")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let config = ConfigManager::custom()
        .comparison_policy(cli.policy)
        .build();
    let checker = BrowserChecker::new(config).context("规则库初始化失败")?;

    let outdated = checker.check_request(&user_agent, cli.plugins.as_deref());
    tracing::debug!("过期应用数：{}", outdated.len());

    let output = if cli.lite {
        let lite: Vec<_> = outdated.into_iter().map(browsercheck::OutdatedApplicationLite::from).collect();
        if cli.pretty { to_pretty_json(&lite)? } else { to_compact_json(&lite)? }
    } else if cli.pretty {
        to_pretty_json(&outdated)?
    } else {
        to_compact_json(&outdated)?
    };

    println!("{}", output);
    Ok(())
}
