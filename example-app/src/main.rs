//! # 示例应用程序
//!
//! 演示组件扫描、字段注入、后置处理器和拦截代理

mod service;

use anyhow::Context;
use clap::Parser;
use di_common::{ConfigError, ContainerConfig};
use di_impl::ApplicationContext;
use service::UserInterface;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn IoC 容器示例应用")]
struct Args {
    /// 扫描路径，优先于配置文件
    #[arg(short, long)]
    scan_path: Option<String>,

    /// 配置文件路径
    #[arg(short, long, default_value = "config/app.toml")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志，RUST_LOG 优先
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(parse_log_level(&args.log_level))),
        )
        .init();

    info!("启动 Lorn IoC 示例应用");

    let config = resolve_config(&args)?;
    info!("扫描路径: {}", config.namespace());

    let context = ApplicationContext::new(config).context("应用上下文初始化失败")?;

    let user_service = context.get_bean_as::<dyn UserInterface>("userService")?;
    let result = user_service.test();
    info!("userService.test() 返回: {}", result);

    let stats = context.stats();
    info!(
        "容器统计: {} 个 Bean 定义，{} 个单例，{} 个后置处理器",
        stats.bean_definitions, stats.cached_singletons, stats.post_processors
    );

    Ok(())
}

/// 解析容器配置
///
/// 命令行参数优先；配置文件不可用时回退到本程序的 `service` 模块。
fn resolve_config(args: &Args) -> anyhow::Result<ContainerConfig> {
    if let Some(scan_path) = &args.scan_path {
        return Ok(ContainerConfig::new(scan_path.as_str()));
    }

    match ContainerConfig::load(&args.config) {
        Ok(config) => Ok(config),
        Err(ConfigError::LoadError { source }) => {
            warn!("加载配置失败，使用默认扫描路径: {}", source);
            Ok(ContainerConfig::new(service::SCAN_PATH))
        }
        Err(err) => Err(err.into()),
    }
}

/// 解析日志级别
fn parse_log_level(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}
