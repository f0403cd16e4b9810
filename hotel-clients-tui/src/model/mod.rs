//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 表单的状态迁移规则写在 form/ 里，但只由 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod menu;           // 主菜单状态
//!         mod screen;         // 画面路由（Menu / Form）
//!         mod field;          // 单行文本字段
//!         mod field_set;      // 字段组 + 单一焦点
//!         pub mod form;       // 四个用例共用的表单
//!
//!     值得一提的是，虽说 screen.rs 与 form/ 都表示画面状态，但两者有不同：
//!         - Screen 是一个简单的枚举，只标识当前在菜单还是某个表单；
//!         - Form 是表单的数据容器，存储字段、阶段、提交结果与在途请求。
//!           每次从菜单进入都会新建，离开即丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub menu: MenuState,                // 主菜单
//!             pub form: Option<Form>,             // 当前表单（None = 菜单）
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub service: HotelService,          // 请求派发
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单（Form）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据流：
//!         用户在表单中按 Enter
//!             ↓
//!         event/handler.rs 返回 Form(FormMessage::Enter)
//!             ↓
//!         update/form.rs 调用 form.press_enter()
//!             ↓ 返回 Some(Operation)
//!         app.service.dispatch(op) → form.attach(pending)
//!             ↓ 之后每次 Tick
//!         form.poll() → on_reply 迁移状态
//!             ↓
//!         view/components/form.rs 根据 outcome / phase 渲染
//!

mod app;
mod field;
mod field_set;
pub mod form;
mod menu;
mod screen;

pub use app::App;
pub use field::TextField;
pub use form::{Form, FormError, FormInput, Outcome, Phase, UseCase};
pub use menu::MenuState;
pub use screen::Screen;
