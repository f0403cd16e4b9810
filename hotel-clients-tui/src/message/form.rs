//! 表单相关消息

use crate::model::FormInput;

/// 表单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// Enter：前进或提交
    Enter,
    /// 编辑 / 焦点 / 光标输入
    Input(FormInput),
}
