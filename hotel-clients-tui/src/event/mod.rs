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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - Ctrl+C 与 Esc 为全局键，就地处理；
//!                 - 有表单打开时，调用 handle_form_keys 处理；
//!                 - 否则调用 handle_menu_keys 处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     菜单：
//!         ↑ / k       → MenuMessage::SelectPrevious
//!         ↓ / j       → MenuMessage::SelectNext
//!         Home / End  → MenuMessage::SelectFirst / SelectLast
//!         Enter       → MenuMessage::Confirm
//!         Esc         → AppMessage::Back（退出程序）
//!
//!     表单：
//!         Tab / Shift+Tab / ↑ / ↓  → FormInput::NextField
//!         Enter                    → FormMessage::Enter
//!         ← → Home End             → 光标移动
//!         Backspace / Delete       → 删除字符
//!         字符输入                  → FormInput::Char(c)
//!         Esc                      → AppMessage::Back（回到菜单）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
