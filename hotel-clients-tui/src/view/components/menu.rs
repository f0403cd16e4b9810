//! 主菜单组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{MenuState, UseCase};
use crate::view::theme::{colors, Styles};

/// 菜单项文本
fn label(use_case: UseCase) -> &'static str {
    let menu = &t().menu;
    match use_case {
        UseCase::Register => menu.register,
        UseCase::Search => menu.search,
        UseCase::Update => menu.update,
        UseCase::Delete => menu.delete,
    }
}

/// 渲染主菜单
pub fn render(menu: &MenuState, frame: &mut Frame, area: Rect) {
    let c = colors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, use_case)| {
            let is_selected = i == menu.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{}", label(*use_case)),
                style,
            )))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(menu.selected));
    frame.render_stateful_widget(list, rows[0], &mut state);

    let footer = Paragraph::new(t().menu.footer).style(Style::default().fg(c.muted));
    frame.render_widget(footer, rows[1]);
}
