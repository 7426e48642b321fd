//! salut-errors - 统一错误处理
//!
//! 本服务没有恢复逻辑：所有错误一路传播到 main 并终止进程。

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::Config(_) => tonic::Code::FailedPrecondition,
            Self::Transport(_) => tonic::Code::Unavailable,
            Self::Internal(_) => tonic::Code::Internal,
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        tonic::Status::new(err.grpc_code(), err.to_string())
    }
}

impl From<tonic::transport::Error> for AppError {
    fn from(err: tonic::transport::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_code_mapping() {
        assert_eq!(
            AppError::transport("bind failed").grpc_code(),
            tonic::Code::Unavailable
        );
        assert_eq!(
            AppError::config("missing port").grpc_code(),
            tonic::Code::FailedPrecondition
        );
        assert_eq!(AppError::internal("boom").grpc_code(), tonic::Code::Internal);
    }

    #[test]
    fn test_status_conversion_keeps_message() {
        let status: tonic::Status = AppError::transport("address in use").into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert!(status.message().contains("address in use"));
    }
}
