//! 单行文本输入字段

use crate::i18n::t;

/// 字段标签
///
/// 只保存标识，显示文本在渲染时按当前语言取。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    FirstName,
    MiddleName,
    LastName,
    Email,
    Room,
    NewEmail,
    NewRoom,
}

impl FieldLabel {
    /// 当前语言下的标签文本
    pub fn text(self) -> &'static str {
        let labels = &t().forms.labels;
        match self {
            Self::FirstName => labels.first_name,
            Self::MiddleName => labels.middle_name,
            Self::LastName => labels.last_name,
            Self::Email => labels.email,
            Self::Room => labels.room,
            Self::NewEmail => labels.new_email,
            Self::NewRoom => labels.new_room,
        }
    }
}

/// 文本输入字段
///
/// `cursor` 以字符计数，范围 `0..=value.chars().count()`。
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: FieldLabel,
    value: String,
    cursor: usize,
    /// 最大字符数，`None` 表示不限
    char_limit: Option<usize>,
    pub focused: bool,
    /// 锁定的字段仍然显示，但忽略所有编辑
    pub locked: bool,
}

impl TextField {
    pub fn new(label: FieldLabel, char_limit: Option<usize>) -> Self {
        Self {
            label,
            value: String::new(),
            cursor: 0,
            char_limit,
            focused: false,
            locked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// 字符索引 -> 字节索引
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// 程序化替换内容，光标移到末尾
    ///
    /// 不受锁定和字符上限约束：预填的值必须原样显示。
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.char_count();
    }

    /// 在光标处插入字符
    pub fn insert(&mut self, ch: char) {
        if self.locked || ch.is_control() {
            return;
        }
        if self
            .char_limit
            .is_some_and(|limit| self.char_count() >= limit)
        {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if self.locked || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// 删除光标后的字符
    pub fn delete(&mut self) {
        if self.locked || self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}
