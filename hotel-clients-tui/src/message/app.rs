//! 应用主消息枚举

use super::{FormMessage, MenuMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一级（表单回到菜单，菜单则退出）
    Back,

    /// 主循环节拍，用于轮询在途请求
    Tick,

    /// 菜单相关消息
    Menu(MenuMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
