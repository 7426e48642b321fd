//! Greeter gRPC 实现

use tonic::{Request, Response, Status};
use tracing::debug;

use super::proto::greeter_server::Greeter;
use super::proto::{HelloReply, HelloRequest};

/// Greeter 实现
///
/// 方法集由 proto 契约定义。SayHello 的业务逻辑不在本仓库内，
/// handler 注册后对所有调用返回 UNIMPLEMENTED。
#[derive(Debug, Default, Clone)]
pub struct GreeterImpl;

impl GreeterImpl {
    pub fn new() -> Self {
        Self
    }
}

#[tonic::async_trait]
impl Greeter for GreeterImpl {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        debug!(name = %request.get_ref().name, "SayHello called");

        Err(Status::unimplemented("SayHello is not implemented"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_say_hello_is_unimplemented() {
        let service = GreeterImpl::new();
        let status = service
            .say_hello(Request::new(HelloRequest {
                name: "world".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::Unimplemented);
    }
}
