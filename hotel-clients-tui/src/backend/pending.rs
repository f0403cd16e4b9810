//! 进行中的请求句柄

use hotel_clients_api::{ApiError, ApiResult, Reply};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

/// 一次提交对应的结果通道
///
/// 归属于发起提交的表单实例。丢弃句柄（离开表单）会中止后台任务，
/// 被丢弃的表单不会收到迟到的结果。
#[derive(Debug)]
pub struct PendingRequest {
    receiver: oneshot::Receiver<ApiResult<Reply>>,
    handle: JoinHandle<()>,
}

impl PendingRequest {
    pub fn new(receiver: oneshot::Receiver<ApiResult<Reply>>, handle: JoinHandle<()>) -> Self {
        Self { receiver, handle }
    }

    /// 非阻塞地取结果
    ///
    /// 任务在发送前结束（panic 或被中止）时返回一个传输层错误。
    pub fn poll(&mut self) -> Option<ApiResult<Reply>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(ApiError::Transport {
                detail: "request task ended without a result".to_string(),
            })),
        }
    }

    /// 中止后台任务
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
