//! Hotel Clients TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 请求派发与配置 (`backend/`)
//!
//!
//! main.rs
//! Hotel Clients TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录下的文件
//!     load_config()           // 读取 config.toml 与环境变量
//!     Runtime::new()          // tokio 运行时，请求在其上执行
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hotel_clients_api::HotelClient;

use backend::{AppConfig, ConfigService, HotelService, LocalConfigService, CONFIG_PATH_ENV};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（guard 持有到程序结束）
    let _guard = init_logging()?;

    // 2. 配置
    let config = load_config()?;
    i18n::set_language(config.ui.language());
    set_theme(config.ui.theme());

    // 3. 运行时与请求服务
    let runtime = tokio::runtime::Runtime::new()?;
    let client = HotelClient::new(config.api.client_config())?;
    let service = HotelService::new(
        Arc::new(client),
        runtime.handle().clone(),
        config.api.timeout(),
    );
    log::info!(
        "Starting with API {} (timeout {:?}, language {})",
        config.api.base_url,
        service.timeout(),
        i18n::current_language().code()
    );

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(service);
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 丢弃表单会中止在途请求，再关闭运行时
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(500));
    log::info!("Exiting");

    result
}

/// 加载配置，`HOTEL_CLIENTS_CONFIG` 可指定配置文件路径
fn load_config() -> Result<AppConfig> {
    let service = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new(),
    };
    log::debug!("Loading config from {}", service.path().display());
    Ok(service.load()?)
}
