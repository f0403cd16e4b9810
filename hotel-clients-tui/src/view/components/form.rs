//! 表单组件
//!
//! 布局（自上而下）：
//!
//!     [阶段提示]            仅更新表单
//!     标签
//!       值▎                 焦点字段带光标标记，空字段显示占位符
//!     ...
//!     结果                  发送中 / 成功（绿）/ 错误（红）/ 客户卡片

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use hotel_clients_api::{ApiError, Client};

use crate::i18n::t;
use crate::model::{Form, FormError, Outcome, Phase, TextField, UseCase};
use crate::view::theme::colors;

/// 焦点字段的光标标记
const CURSOR: char = '▎';

/// 值前的缩进
const INDENT: &str = "  ";

/// 表单标题
pub fn title(use_case: UseCase) -> &'static str {
    let titles = &t().forms.titles;
    match use_case {
        UseCase::Register => titles.register,
        UseCase::Search => titles.search,
        UseCase::Update => titles.update,
        UseCase::Delete => titles.delete,
    }
}

/// 渲染表单
pub fn render(form: &Form, frame: &mut Frame, area: Rect) {
    let value_width = usize::from(area.width).saturating_sub(INDENT.len());

    let mut lines = phase_banner(&form.phase);
    for field in form.fields.iter().take(form.active_count()) {
        lines.extend(field_lines(field, value_width));
    }
    if let Some(outcome) = &form.outcome {
        lines.extend(outcome_lines(form, outcome));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 更新表单的阶段提示
fn phase_banner(phase: &Phase) -> Vec<Line<'static>> {
    let c = colors();
    let phases = &t().forms.phases;
    let banner = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);

    match phase {
        Phase::Single => Vec::new(),
        Phase::Searching => vec![Line::styled(phases.searching, banner), Line::from("")],
        Phase::Editing { original } => vec![
            Line::styled(phases.editing, banner),
            Line::from(vec![
                Span::styled(format!("{} ", phases.client_found), Style::default().fg(c.muted)),
                Span::styled(original.full_name(), Style::default().fg(c.fg)),
            ]),
            Line::from(""),
        ],
    }
}

/// 单个字段：标签 + 值
fn field_lines(field: &TextField, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let label = field.label.text();

    let (display, style) = if field.focused {
        (
            scroll_to_cursor(field.value(), field.cursor(), width),
            Style::default().fg(Color::Cyan),
        )
    } else if field.is_empty() {
        // 空字段用标签作为占位符
        (truncate_to_width(label, width), Style::default().fg(Color::DarkGray))
    } else if field.locked {
        (truncate_to_width(field.value(), width), Style::default().fg(c.muted))
    } else {
        (truncate_to_width(field.value(), width), Style::default().fg(c.fg))
    };

    vec![
        Line::styled(label, Style::default().fg(Color::Gray)),
        Line::styled(format!("{INDENT}{display}"), style),
        Line::from(""),
    ]
}

/// 结果区域
fn outcome_lines(form: &Form, outcome: &Outcome) -> Vec<Line<'static>> {
    let c = colors();
    let results = &t().forms.results;
    let success = Style::default().fg(c.success).add_modifier(Modifier::BOLD);

    match outcome {
        Outcome::Pending => vec![Line::styled(results.sending, Style::default().fg(c.warning))],
        Outcome::Failure(error) => vec![Line::styled(
            format!("{}: {}", t().common.error, error_text(error)),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )],
        Outcome::Success(Some(client)) => {
            let mut lines = vec![
                Line::styled(results.heading, Style::default().fg(c.muted)),
                Line::styled(results.found, success),
            ];
            lines.extend(client_card(client));
            lines
        }
        Outcome::Success(None) => {
            let text = match (form.use_case(), &form.phase) {
                (UseCase::Register, _) => results.registered,
                (UseCase::Update, Phase::Editing { .. }) => results.updated,
                (UseCase::Delete, _) => results.deleted,
                (UseCase::Search | UseCase::Update, _) => results.not_found,
            };
            vec![Line::styled(text, success)]
        }
    }
}

/// 搜索结果卡片
fn client_card(client: &Client) -> Vec<Line<'static>> {
    let c = colors();
    let card = &t().forms.card;
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label}: "), Style::default().fg(c.muted)),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };

    vec![
        row(card.first_name, client.first_name.clone()),
        row(card.middle_name, client.middle_name.clone()),
        row(card.last_name, client.last_name.clone()),
        row(card.email, client.email.clone()),
        row(card.room, client.room.to_string()),
    ]
}

/// 错误文本（当前语言）
pub fn error_text(error: &FormError) -> String {
    let errors = &t().errors;
    match error {
        FormError::NoCriteria => errors.no_criteria.to_string(),
        FormError::Api(api) => match api {
            ApiError::UnexpectedStatus { status, .. } => {
                format!("{} {status}", errors.server_status)
            }
            ApiError::Transport { detail } => format!("{} {detail}", errors.transport),
            ApiError::Timeout { .. } => errors.timeout.to_string(),
            ApiError::Decode { detail } => format!("{} {detail}", errors.decode),
            ApiError::Serialization { detail } => {
                format!("{} {detail}", errors.serialization)
            }
        },
    }
}

/// 插入光标标记，并横向滚动使光标保持可见
///
/// 宽度按终端显示宽度计算，光标标记占 1 列。
fn scroll_to_cursor(value: &str, cursor: usize, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());
    let width = width.max(1);

    // 从光标向左扩展，直到放不下
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let mut out: String = chars[start..cursor].iter().collect();
    out.push(CURSOR);

    // 光标右侧能放多少放多少
    for ch in &chars[cursor..] {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(*ch);
    }
    out
}

/// 按显示宽度截断
fn truncate_to_width(value: &str, width: usize) -> String {
    let mut used = 0;
    value
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
