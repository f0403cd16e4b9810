//! 当前显示的画面

use super::form::UseCase;

/// 画面路由
///
/// 相当于门牌号：只标识当前在哪个画面，表单数据存放在 `App::form`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Form(UseCase),
}

impl Screen {
    pub fn is_menu(self) -> bool {
        matches!(self, Self::Menu)
    }
}
