//! 登记表单
//!
//! 五个字段，不限长度。只有在最后一个字段上按 Enter 才提交，
//! 前面的 Enter 相当于 Tab。只有 201 才算提交成功，失败时保留输入。

use hotel_clients_api::{ApiResult, ClientPayload, Operation, Reply};

use super::{
    all_fields, settle, EnterAction, FieldSpec, Form, FormSpec, Settled, SubmitPolicy, UseCase,
};
use crate::model::field::FieldLabel;

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::new(FieldLabel::FirstName, None),
    FieldSpec::new(FieldLabel::MiddleName, None),
    FieldSpec::new(FieldLabel::LastName, None),
    FieldSpec::new(FieldLabel::Email, None),
    FieldSpec::new(FieldLabel::Room, None),
];

pub static SPEC: FormSpec = FormSpec {
    use_case: UseCase::Register,
    fields: &FIELDS,
    policy: SubmitPolicy::OnSuccess,
    active_count: all_fields,
    on_enter,
    on_reply,
};

fn on_enter(form: &Form) -> EnterAction {
    if form.fields.focused_index() + 1 < form.fields.len() {
        return EnterAction::Advance;
    }

    let value = |i| form.fields.value(i).to_string();
    EnterAction::Submit(Operation::Create(ClientPayload {
        first_name: value(0),
        middle_name: value(1),
        last_name: value(2),
        email: value(3),
        room: value(4),
    }))
}

fn on_reply(_form: &mut Form, result: ApiResult<Reply>) -> Settled {
    settle(result)
}
