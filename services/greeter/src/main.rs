//! Greeter Service - 服务入口
//!
//! 加载配置 -> 初始化 tracing -> 构建有界线程池运行时 -> 运行至终止信号。

use greeter::api::GreeterImpl;
use greeter::api::proto::greeter_server::GreeterServer;
use salut_bootstrap::{build_runtime, init_runtime, serve};
use salut_config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load("config")?;

    init_runtime(&config);

    let runtime = build_runtime(&config)?;
    runtime.block_on(serve(&config, GreeterServer::new(GreeterImpl::new())))?;

    Ok(())
}
