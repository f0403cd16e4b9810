//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ MenuMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ FormMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │ Tick      │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 派发请求          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │ tokio              │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │hotel-clients-api  │           │
//！│                                           │   (HotelApi)      │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：请求派发与配置
//!
//! Backend 层与 UI 解耦，UI 只通过 `HotelService` 发起请求。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件加载（TOML）
//!         mod hotel_service;      // 请求派发（tokio 运行时）
//!         mod pending;            // 在途请求句柄
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、请求派发（HotelService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，请求在 tokio 运行时上执行：
//!
//!         let pending = app.service.dispatch(operation);
//!             │
//!             ├─ runtime.spawn(timeout(api.execute(&operation)))
//!             │
//!             └─ 返回 PendingRequest { receiver, handle }
//!
//!     每次 Tick，Update 层调用 form.poll() 非阻塞地取结果。
//!     表单被丢弃时 PendingRequest 随之丢弃，后台任务被中止。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 main.rs 中：
//!
//!         let config = LocalConfigService::new().load()?;
//!         i18n::set_language(config.ui.language());
//!         set_theme(config.ui.theme());
//!         let client = HotelClient::new(config.api.client_config())?;
//!

mod config_service;
mod hotel_service;
mod pending;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, CONFIG_PATH_ENV};
pub use hotel_service::HotelService;
pub use pending::PendingRequest;
