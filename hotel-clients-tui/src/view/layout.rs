//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Screen};

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    render_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前画面渲染内容
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let title = match app.screen() {
        Screen::Menu => texts.menu.title,
        Screen::Form(use_case) => components::form::title(use_case),
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.form {
        Some(form) => components::form::render(form, frame, inner_area),
        None => components::menu::render(&app.menu, frame, inner_area),
    }
}
