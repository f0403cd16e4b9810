//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, MenuMessage};
use crate::model::{App, FormInput};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Back;
    }

    if app.form.is_some() {
        handle_form_keys(key)
    } else {
        handle_menu_keys(key)
    }
}

/// 处理菜单的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::MENU_CONFIRM.matches(&key) {
        return AppMessage::Menu(MenuMessage::Confirm);
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Menu(MenuMessage::SelectPrevious),

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Menu(MenuMessage::SelectNext),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Menu(MenuMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Menu(MenuMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Enter);
    }

    // Tab / Shift+Tab / ↑ / ↓ 都只向前循环
    if DefaultKeymap::NEXT_FIELD.matches(&key)
        || matches!(key.code, KeyCode::BackTab | KeyCode::Up | KeyCode::Down)
    {
        return input(FormInput::NextField);
    }

    match key.code {
        KeyCode::Left => input(FormInput::CursorLeft),
        KeyCode::Right => input(FormInput::CursorRight),
        KeyCode::Home => input(FormInput::CursorHome),
        KeyCode::End => input(FormInput::CursorEnd),
        KeyCode::Backspace => input(FormInput::Backspace),
        KeyCode::Delete => input(FormInput::Delete),

        // 字符输入（允许 Shift 以输入大写和符号）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            input(FormInput::Char(ch))
        }

        _ => AppMessage::Noop,
    }
}

fn input(input: FormInput) -> AppMessage {
    AppMessage::Form(FormMessage::Input(input))
}
