//! 删除表单

use hotel_clients_api::{ApiResult, Operation, Reply};

use super::{
    all_fields, name_fields, settle, EnterAction, FieldSpec, Form, FormSpec, Settled,
    SubmitPolicy, UseCase, NAME_FORM_CHAR_LIMIT,
};

static FIELDS: [FieldSpec; 3] = name_fields(Some(NAME_FORM_CHAR_LIMIT));

pub static SPEC: FormSpec = FormSpec {
    use_case: UseCase::Delete,
    fields: &FIELDS,
    policy: SubmitPolicy::OnAnyResult,
    active_count: all_fields,
    on_enter,
    on_reply,
};

fn on_enter(form: &Form) -> EnterAction {
    match form.name_criteria() {
        Ok(query) => EnterAction::Submit(Operation::Delete(query)),
        Err(error) => EnterAction::Reject(error),
    }
}

fn on_reply(_form: &mut Form, result: ApiResult<Reply>) -> Settled {
    settle(result)
}
