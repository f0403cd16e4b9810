//! 主菜单状态

use super::form::UseCase;

/// 主菜单：四个用例，选择不循环
#[derive(Debug, Clone)]
pub struct MenuState {
    pub items: [UseCase; 4],
    /// 当前选中的索引
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            items: UseCase::all(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 当前选中的用例
    pub fn current(&self) -> Option<UseCase> {
        self.items.get(self.selected).copied()
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
