//! View 层：根据 Model 渲染 UI
//!
//!     layout.rs               标题栏 + 内容区 + 状态栏
//!     components/menu.rs      主菜单
//!     components/form.rs      四个用例的表单
//!     components/statusbar.rs 快捷键提示与状态消息
//!     theme.rs                深色 / 浅色配色

mod components;
mod layout;
pub mod theme;

pub use layout::render;
