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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod form;
//!         mod menu;
//!
//!         pub use app::AppMessage;
//!         pub use form::FormMessage;
//!         pub use menu::MenuMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                   // 退出应用
//!             Back,                   // 表单 → 菜单；菜单 → 退出
//!             Tick,                   // 每轮主循环一次，用于取回请求结果
//!             Menu(MenuMessage),      // 菜单子消息
//!             Form(FormMessage),      // 表单子消息
//!             Noop,                   // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod form;
mod menu;

pub use app::AppMessage;
pub use form::FormMessage;
pub use menu::MenuMessage;
