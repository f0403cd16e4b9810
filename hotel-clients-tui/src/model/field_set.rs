//! 字段组：有序的输入字段 + 单一焦点

use super::field::TextField;

/// 有序字段列表，任意时刻恰好一个字段处于焦点
#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: Vec<TextField>,
    focused: usize,
}

impl FieldSet {
    /// 创建字段组，焦点在第一个字段
    pub fn new(fields: Vec<TextField>) -> Self {
        let mut set = Self { fields, focused: 0 };
        set.apply_focus();
        set
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TextField> {
        self.fields.get_mut(index)
    }

    /// 指定字段的值，越界时为空串
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", TextField::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextField> {
        self.fields.iter()
    }

    /// 当前焦点字段（接收按键）
    pub fn focused_mut(&mut self) -> Option<&mut TextField> {
        self.fields.get_mut(self.focused)
    }

    /// 焦点移到 `(focused + 1) % active`
    ///
    /// `active` 是当前阶段可用的字段数，会被限制在 `1..=len`。
    pub fn advance_focus(&mut self, active: usize) {
        if self.fields.is_empty() {
            return;
        }
        let active = active.clamp(1, self.fields.len());
        self.focused = (self.focused + 1) % active;
        self.apply_focus();
    }

    /// 直接跳到指定字段，越界忽略
    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = index;
            self.apply_focus();
        }
    }

    fn apply_focus(&mut self) {
        let focused = self.focused;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == focused;
        }
    }
}
