//! salut-bootstrap - 统一服务启动骨架
//!
//! 服务复用的启动逻辑：运行时初始化、关闭信号、gRPC 服务器启动。

mod runtime;
mod shutdown;
mod starter;

pub use runtime::*;
pub use shutdown::*;
pub use starter::*;
