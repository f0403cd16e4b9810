//! 菜单消息处理

use crate::message::MenuMessage;
use crate::model::App;

/// 处理菜单消息
pub fn update(app: &mut App, msg: MenuMessage) {
    match msg {
        MenuMessage::SelectPrevious => app.menu.select_previous(),
        MenuMessage::SelectNext => app.menu.select_next(),
        MenuMessage::SelectFirst => app.menu.select_first(),
        MenuMessage::SelectLast => app.menu.select_last(),
        MenuMessage::Confirm => {
            if let Some(use_case) = app.menu.current() {
                app.clear_status();
                app.open_form(use_case);
            }
        }
    }
}
