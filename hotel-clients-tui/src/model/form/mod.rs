//! 通用分页字段表单
//!
//! 四个用例（登记/查找/更新/删除）共用同一个 `Form` 结构，
//! 差异只在各自的 `FormSpec` 里：
//!
//!     FormSpec {
//!         use_case,           // 用例
//!         fields,             // 字段定义（标签 + 字符上限）
//!         policy,             // 何时标记为已提交
//!         active_count,       // 当前阶段可用的字段数
//!         on_enter,           // Enter 时做什么（前进 / 校验失败 / 提交）
//!         on_reply,           // 收到结果后如何迁移状态
//!     }
//!
//! 生命周期：
//!
//!     菜单 Enter ──▶ Form::new(spec)
//!                       │
//!                       │ Enter
//!                       ▼
//!               on_enter ─┬─ Advance ──▶ 焦点前进
//!                         ├─ Reject ───▶ outcome = Failure(NoCriteria)
//!                         └─ Submit ───▶ outcome = Pending，交给 Update 层派发
//!                                          │
//!                                          │ Tick 轮询到结果
//!                                          ▼
//!                                     on_reply ──▶ outcome / phase / submitted
//!
//! `submitted` 一旦为 true，除了离开表单外的所有输入都被忽略。

mod delete;
mod register;
mod search;
mod update;

use hotel_clients_api::{ApiError, ApiResult, Client, NameQuery, Operation, Reply};

use super::field::{FieldLabel, TextField};
use super::field_set::FieldSet;
use crate::backend::PendingRequest;

/// 查找 / 更新 / 删除表单的字段字符上限
pub const NAME_FORM_CHAR_LIMIT: usize = 32;

/// 用例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Register,
    Search,
    Update,
    Delete,
}

impl UseCase {
    pub fn all() -> [UseCase; 4] {
        [Self::Register, Self::Search, Self::Update, Self::Delete]
    }

    pub fn spec(self) -> &'static FormSpec {
        match self {
            Self::Register => &register::SPEC,
            Self::Search => &search::SPEC,
            Self::Update => &update::SPEC,
            Self::Delete => &delete::SPEC,
        }
    }
}

/// 字段定义
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: FieldLabel,
    pub char_limit: Option<usize>,
}

impl FieldSpec {
    const fn new(label: FieldLabel, char_limit: Option<usize>) -> Self {
        Self { label, char_limit }
    }
}

/// 何时把表单标记为已提交
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// 只有成功才算提交（登记表单），失败后可以修改再提交
    OnSuccess,
    /// 收到任何结果都算提交
    OnAnyResult,
}

/// Enter 的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterAction {
    /// 焦点前进到下一个字段
    Advance,
    /// 本地校验失败，不发请求
    Reject(FormError),
    /// 发起请求
    Submit(Operation),
}

/// 一次回复处理后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// 新的结果展示，`None` 表示清空
    pub outcome: Option<Outcome>,
    /// 是否是本表单的最终结果（受 `SubmitPolicy` 约束）
    pub terminal: bool,
}

/// 用例差异的静态描述
pub struct FormSpec {
    pub use_case: UseCase,
    pub fields: &'static [FieldSpec],
    pub policy: SubmitPolicy,
    pub active_count: fn(&Form) -> usize,
    pub on_enter: fn(&Form) -> EnterAction,
    pub on_reply: fn(&mut Form, ApiResult<Reply>) -> Settled,
}

/// 表单阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// 单阶段表单（登记 / 查找 / 删除）
    Single,
    /// 更新表单第一阶段：按姓名查找
    Searching,
    /// 更新表单第二阶段：编辑已找到的客户
    Editing { original: Client },
}

/// 表单错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// 三个姓名字段全部为空
    NoCriteria,
    Api(ApiError),
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    /// 成功，查找类操作可能带回客户（`None` 表示未找到）
    Success(Option<Client>),
    Failure(FormError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// 表单输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    NextField,
    Char(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// 一次菜单访问对应的表单实例
#[derive(Debug)]
pub struct Form {
    spec: &'static FormSpec,
    pub fields: FieldSet,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub submitted: bool,
    pending: Option<PendingRequest>,
}

impl std::fmt::Debug for FormSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSpec")
            .field("use_case", &self.use_case)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Form {
    /// 按用例创建全新的表单
    pub fn new(use_case: UseCase) -> Self {
        let spec = use_case.spec();
        let fields = spec
            .fields
            .iter()
            .map(|f| TextField::new(f.label, f.char_limit))
            .collect();
        let phase = match use_case {
            UseCase::Update => Phase::Searching,
            _ => Phase::Single,
        };

        Self {
            spec,
            fields: FieldSet::new(fields),
            phase,
            outcome: None,
            submitted: false,
            pending: None,
        }
    }

    pub fn use_case(&self) -> UseCase {
        self.spec.use_case
    }

    /// 当前阶段可用的字段数
    pub fn active_count(&self) -> usize {
        (self.spec.active_count)(self)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 处理非提交类输入
    pub fn handle_input(&mut self, input: FormInput) {
        if self.submitted {
            return;
        }

        if input == FormInput::NextField {
            let active = self.active_count();
            self.fields.advance_focus(active);
            return;
        }

        let Some(field) = self.fields.focused_mut() else {
            return;
        };
        match input {
            FormInput::Char(ch) => field.insert(ch),
            FormInput::Backspace => field.backspace(),
            FormInput::Delete => field.delete(),
            FormInput::CursorLeft => field.move_left(),
            FormInput::CursorRight => field.move_right(),
            FormInput::CursorHome => field.move_home(),
            FormInput::CursorEnd => field.move_end(),
            FormInput::NextField => {}
        }
    }

    /// 处理 Enter
    ///
    /// 返回需要派发的请求；已提交或已有请求在途时不做任何事。
    pub fn press_enter(&mut self) -> Option<Operation> {
        if self.submitted || self.is_pending() {
            return None;
        }

        match (self.spec.on_enter)(self) {
            EnterAction::Advance => {
                let active = self.active_count();
                self.fields.advance_focus(active);
                None
            }
            EnterAction::Reject(error) => {
                self.outcome = Some(Outcome::Failure(error));
                None
            }
            EnterAction::Submit(operation) => {
                self.outcome = Some(Outcome::Pending);
                Some(operation)
            }
        }
    }

    /// 绑定刚派发的请求
    pub fn attach(&mut self, pending: PendingRequest) {
        self.pending = Some(pending);
    }

    /// 轮询在途请求，结果就绪时处理并返回 `true`
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.pending.as_mut().and_then(PendingRequest::poll) else {
            return false;
        };
        self.pending = None;
        self.receive(result);
        true
    }

    /// 中止在途请求
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.cancel();
                true
            }
            None => false,
        }
    }

    /// 处理一次请求结果
    pub fn receive(&mut self, result: ApiResult<Reply>) {
        let settled = (self.spec.on_reply)(self, result);
        if settled.terminal {
            let success = settled.outcome.as_ref().is_some_and(Outcome::is_success);
            self.submitted = match self.spec.policy {
                SubmitPolicy::OnSuccess => success,
                SubmitPolicy::OnAnyResult => true,
            };
        }
        self.outcome = settled.outcome;
    }

    /// 前三个字段组成的姓名查询
    fn name_query(&self) -> NameQuery {
        NameQuery::from_fields(self.fields.value(0), self.fields.value(1), self.fields.value(2))
    }

    /// 查找 / 删除 / 更新第一阶段共用的校验
    fn name_criteria(&self) -> Result<NameQuery, FormError> {
        let query = self.name_query();
        if query.is_empty() {
            Err(FormError::NoCriteria)
        } else {
            Ok(query)
        }
    }
}

/// 三个姓名字段
const fn name_fields(char_limit: Option<usize>) -> [FieldSpec; 3] {
    [
        FieldSpec::new(FieldLabel::FirstName, char_limit),
        FieldSpec::new(FieldLabel::MiddleName, char_limit),
        FieldSpec::new(FieldLabel::LastName, char_limit),
    ]
}

/// 全部字段都可用
fn all_fields(form: &Form) -> usize {
    form.fields.len()
}

/// 单结果表单的通用回复处理
fn settle(result: ApiResult<Reply>) -> Settled {
    let outcome = match result {
        Ok(Reply::Found(client)) => Outcome::Success(client),
        Ok(_) => Outcome::Success(None),
        Err(e) => Outcome::Failure(FormError::Api(e)),
    };
    Settled {
        outcome: Some(outcome),
        terminal: true,
    }
}

#[cfg(test)]
pub(crate) mod tests;
