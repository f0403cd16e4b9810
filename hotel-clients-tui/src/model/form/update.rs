//! 更新表单（两阶段）
//!
//!     Searching ── Enter ──▶ GET /search
//!         │                      │
//!         │◀── 错误 / 未找到 ─────┤
//!         │                      │ 找到客户
//!         │                      ▼
//!         │                  Editing { original }
//!         │                      │ Enter
//!         │                      ▼
//!         │                  PUT /update（姓名取自 original）
//!         │                      │
//!         │                      ▼
//!         │                  submitted
//!
//! 查找阶段只有前三个字段可用；进入编辑阶段后五个字段都可用，
//! 但姓名字段被锁定，更新请求里的姓名永远来自找到的客户。

use hotel_clients_api::{ApiResult, Client, ClientPayload, Operation, Reply};

use super::{
    settle, EnterAction, FieldSpec, Form, FormError, FormSpec, Outcome, Phase, Settled,
    SubmitPolicy, UseCase, NAME_FORM_CHAR_LIMIT,
};
use crate::model::field::FieldLabel;

const LIMIT: Option<usize> = Some(NAME_FORM_CHAR_LIMIT);

/// 查找阶段可用的字段数
const SEARCH_FIELDS: usize = 3;
const EMAIL: usize = 3;
const ROOM: usize = 4;

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::new(FieldLabel::FirstName, LIMIT),
    FieldSpec::new(FieldLabel::MiddleName, LIMIT),
    FieldSpec::new(FieldLabel::LastName, LIMIT),
    FieldSpec::new(FieldLabel::NewEmail, LIMIT),
    FieldSpec::new(FieldLabel::NewRoom, LIMIT),
];

pub static SPEC: FormSpec = FormSpec {
    use_case: UseCase::Update,
    fields: &FIELDS,
    policy: SubmitPolicy::OnAnyResult,
    active_count,
    on_enter,
    on_reply,
};

fn active_count(form: &Form) -> usize {
    match form.phase {
        Phase::Editing { .. } => form.fields.len(),
        _ => SEARCH_FIELDS,
    }
}

fn on_enter(form: &Form) -> EnterAction {
    match &form.phase {
        Phase::Editing { original } => EnterAction::Submit(Operation::Update(
            ClientPayload::for_update(original, form.fields.value(EMAIL), form.fields.value(ROOM)),
        )),
        _ => match form.name_criteria() {
            Ok(query) => EnterAction::Submit(Operation::Search(query)),
            Err(error) => EnterAction::Reject(error),
        },
    }
}

fn on_reply(form: &mut Form, result: ApiResult<Reply>) -> Settled {
    if matches!(form.phase, Phase::Editing { .. }) {
        return settle(result);
    }

    match result {
        Ok(Reply::Found(Some(client))) => {
            enter_editing(form, client);
            Settled {
                outcome: None,
                terminal: false,
            }
        }
        Ok(_) => Settled {
            outcome: Some(Outcome::Success(None)),
            terminal: false,
        },
        Err(e) => Settled {
            outcome: Some(Outcome::Failure(FormError::Api(e))),
            terminal: false,
        },
    }
}

/// 预填邮箱和房间号，锁定姓名字段，焦点移到邮箱
fn enter_editing(form: &mut Form, client: Client) {
    if let Some(field) = form.fields.get_mut(EMAIL) {
        field.set_value(&client.email);
    }
    if let Some(field) = form.fields.get_mut(ROOM) {
        field.set_value(&client.room.to_string());
    }
    for i in 0..SEARCH_FIELDS {
        if let Some(field) = form.fields.get_mut(i) {
            field.locked = true;
        }
    }
    form.fields.focus(EMAIL);
    form.phase = Phase::Editing { original: client };
}
