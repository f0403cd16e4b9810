//! UI 组件

pub mod form;
pub mod menu;
pub mod statusbar;
