//! 日志初始化
//!
//! 终端被 UI 占用，日志写入文件：`<cache dir>/hotel-clients/hotel-clients.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "hotel-clients.log";

/// 日志目录
fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hotel-clients")
}

/// 安装全局日志订阅者
///
/// 返回的 guard 必须保持到程序结束，否则缓冲中的日志会丢失。
/// `log` 宏的记录经 tracing-subscriber 自带的桥接进入同一个文件。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    tracing::info!(path = %dir.join(LOG_FILE).display(), "logging initialised");
    Ok(guard)
}
