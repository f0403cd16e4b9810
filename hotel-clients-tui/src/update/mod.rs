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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，也是唯一派发请求的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod menu;               // 菜单子消息处理
//!         mod form;               // 表单子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => app.should_quit = true,
//!                     AppMessage::Back => 关闭表单，或在菜单时退出,
//!                     AppMessage::Tick => form::poll(app),
//!                     AppMessage::Menu(menu_msg) => menu::update(app, menu_msg),
//!                     AppMessage::Form(form_msg) => form::update(app, form_msg),
//!                     ...
//!                 }
//!             }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单更新（form.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FormMessage::Input(..)  → form.handle_input(..)
//!     FormMessage::Enter      → form.press_enter()
//!                                 └─ Some(op) → service.dispatch(op) → form.attach(..)
//!     AppMessage::Tick        → form.poll()，结果就绪时更新状态栏
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod menu;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Back => {
            if app.form.is_some() {
                if app.close_form() {
                    app.set_status(t().status_bar.cancelled);
                } else {
                    app.clear_status();
                }
            } else {
                app.should_quit = true;
            }
        }

        AppMessage::Tick => {
            form::poll(app);
        }

        AppMessage::Menu(menu_msg) => {
            menu::update(app, menu_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
pub(crate) mod tests;
