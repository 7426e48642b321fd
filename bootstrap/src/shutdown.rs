//! Graceful Shutdown

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::info;

/// Shutdown 控制器
///
/// 进程内的终止开关。正常部署下只有 OS 信号触发关闭，
/// 嵌入式运行（集成测试）通过它来结束 serve 循环。
#[derive(Clone, Default)]
pub struct ShutdownController {
    notify: Arc<Notify>,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            notify: Arc::new(Notify::new()),
        }
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        info!("Triggering shutdown");
        self.notify.notify_waiters();
    }

    /// 创建一个可以等待关闭的 future
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        let notify = self.notify.clone();
        async move {
            notify.notified().await;
        }
    }
}
