//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use salut_config::AppConfig;
use salut_errors::{AppError, AppResult};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::runtime::shutdown_signal;

/// 运行 gRPC 服务
///
/// 服务的统一入口点。它负责：
/// 1. 解析监听地址（明文端口，无 TLS）
/// 2. 注册 gRPC 服务
/// 3. 阻塞运行，直到收到终止信号
///
/// 端口被占用等绑定失败直接作为 `AppError::Transport` 返回，
/// 不重试、不吞掉。
pub async fn serve<S>(config: &AppConfig, service: S) -> AppResult<()>
where
    S: tonic::codegen::Service<
            http::Request<tonic::body::Body>,
            Response = http::Response<tonic::body::Body>,
            Error = std::convert::Infallible,
        > + tonic::server::NamedService
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .map_err(|e| AppError::config(format!("invalid listen address: {}", e)))?;

    info!(%addr, service = S::NAME, "gRPC server starting");

    Server::builder()
        .add_service(service)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 在已绑定的 listener 上运行 gRPC 服务
///
/// 关闭信号由调用方提供。集成测试用它拿临时端口并在进程内结束服务。
pub async fn serve_with_incoming<S, F>(
    listener: tokio::net::TcpListener,
    service: S,
    signal: F,
) -> AppResult<()>
where
    S: tonic::codegen::Service<
            http::Request<tonic::body::Body>,
            Response = http::Response<tonic::body::Body>,
            Error = std::convert::Infallible,
        > + tonic::server::NamedService
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
    F: Future<Output = ()>,
{
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::transport(e.to_string()))?;

    info!(%addr, service = S::NAME, "gRPC server starting");

    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
        .await?;

    info!("Service stopped");

    Ok(())
}
