//! 酒店客户服务
//!
//! 把一次 `Operation` 放到 tokio 运行时上执行，
//! 结果通过 `PendingRequest` 交回给发起的表单。

use std::sync::Arc;
use std::time::Duration;

use hotel_clients_api::{ApiError, HotelApi, Operation};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::pending::PendingRequest;

/// TUI 请求服务
///
/// 持有 API 实现和运行时句柄，供 Update 层调用
#[derive(Clone)]
pub struct HotelService {
    api: Arc<dyn HotelApi>,
    runtime: Handle,
    timeout: Duration,
}

impl HotelService {
    /// 创建服务实例
    ///
    /// `timeout` 是单次请求的截止时间，超时后合成 `ApiError::Timeout`。
    pub fn new(api: Arc<dyn HotelApi>, runtime: Handle, timeout: Duration) -> Self {
        Self {
            api,
            runtime,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 在后台执行请求
    pub fn dispatch(&self, operation: Operation) -> PendingRequest {
        let (sender, receiver) = oneshot::channel();
        let api = Arc::clone(&self.api);
        let deadline = self.timeout;

        let handle = self.runtime.spawn(async move {
            let name = operation.name();
            log::info!("{name}: {} {}", operation.method(), operation.path());

            let result = match tokio::time::timeout(deadline, api.execute(&operation)).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout {
                    detail: format!("no response after {deadline:?}"),
                }),
            };

            match &result {
                Ok(reply) => log::debug!("{name}: {reply:?}"),
                Err(e) if e.is_transport() => log::warn!("{name}: {e}"),
                Err(e) => log::error!("{name}: {e}"),
            }

            // 接收端已丢弃说明表单已关闭，结果无人关心
            let _ = sender.send(result);
        });

        PendingRequest::new(receiver, handle)
    }
}
