//! Greeter 服务库
//!
//! 二进制入口在 main.rs；库侧只暴露 API 层，供集成测试复用。

pub mod api;
