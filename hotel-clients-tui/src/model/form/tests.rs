#![allow(clippy::unwrap_used, clippy::panic)]

use hotel_clients_api::{ApiError, Client, ClientPayload, NameQuery, Operation, Reply};

use super::{Form, FormError, FormInput, Outcome, Phase, UseCase};

pub(crate) fn ana() -> Client {
    Client {
        first_name: "Ana".to_string(),
        middle_name: "López".to_string(),
        last_name: "Ruiz".to_string(),
        email: "ana@example.com".to_string(),
        room: 204,
    }
}

pub(crate) fn type_text(form: &mut Form, text: &str) {
    for ch in text.chars() {
        form.handle_input(FormInput::Char(ch));
    }
}

fn server_error(status: u16) -> ApiError {
    ApiError::UnexpectedStatus {
        status,
        body: String::new(),
    }
}

fn fill_register(form: &mut Form) {
    for (i, text) in ["Ana", "López", "Ruiz", "ana@example.com", "204"]
        .iter()
        .enumerate()
    {
        if i > 0 {
            form.handle_input(FormInput::NextField);
        }
        type_text(form, text);
    }
}

// ============ Register ============

#[test]
fn test_register_enter_advances_until_last_field() {
    let mut form = Form::new(UseCase::Register);
    for expected in 1..5 {
        assert_eq!(form.press_enter(), None);
        assert_eq!(form.fields.focused_index(), expected);
    }
    assert!(matches!(form.press_enter(), Some(Operation::Create(_))));
    assert_eq!(form.outcome, Some(Outcome::Pending));
}

#[test]
fn test_register_submits_all_five_values() {
    let mut form = Form::new(UseCase::Register);
    fill_register(&mut form);
    let op = form.press_enter().unwrap();
    assert_eq!(
        op,
        Operation::Create(ClientPayload {
            first_name: "Ana".to_string(),
            middle_name: "López".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            room: "204".to_string(),
        })
    );
}

#[test]
fn test_register_failure_keeps_form_open() {
    for error in [
        server_error(400),
        server_error(500),
        ApiError::Transport {
            detail: "connection refused".to_string(),
        },
    ] {
        let mut form = Form::new(UseCase::Register);
        fill_register(&mut form);
        form.press_enter().unwrap();
        form.receive(Err(error.clone()));

        assert!(!form.submitted, "{error:?}");
        assert_eq!(form.outcome, Some(Outcome::Failure(FormError::Api(error))));
        assert_eq!(form.fields.value(0), "Ana");
        assert_eq!(form.fields.value(4), "204");

        // 失败后可以再次提交
        assert!(form.press_enter().is_some());
    }
}

#[test]
fn test_register_success_is_terminal() {
    let mut form = Form::new(UseCase::Register);
    fill_register(&mut form);
    form.press_enter().unwrap();
    form.receive(Ok(Reply::Created));

    assert!(form.submitted);
    assert_eq!(form.outcome, Some(Outcome::Success(None)));
    assert_eq!(form.fields.value(3), "ana@example.com");

    type_text(&mut form, "x");
    form.handle_input(FormInput::NextField);
    assert_eq!(form.fields.value(4), "204");
    assert_eq!(form.fields.focused_index(), 4);
    assert_eq!(form.press_enter(), None);
}

#[test]
fn test_register_has_no_char_limit() {
    let mut form = Form::new(UseCase::Register);
    let long = "a".repeat(80);
    type_text(&mut form, &long);
    assert_eq!(form.fields.value(0), long);
}

// ============ Search / Delete ============

#[test]
fn test_name_forms_submit_iff_any_criterion() {
    for use_case in [UseCase::Search, UseCase::Delete] {
        for mask in 0u8..8 {
            let mut form = Form::new(use_case);
            for i in 0..3 {
                if mask & (1 << i) != 0 {
                    type_text(&mut form, "x");
                }
                form.handle_input(FormInput::NextField);
            }

            let op = form.press_enter();
            assert_eq!(op.is_some(), mask != 0, "{use_case:?} mask {mask:03b}");
            if mask == 0 {
                assert_eq!(
                    form.outcome,
                    Some(Outcome::Failure(FormError::NoCriteria))
                );
            }
            assert!(!form.submitted);
        }
    }
}

#[test]
fn test_search_omits_empty_criteria() {
    let mut form = Form::new(UseCase::Search);
    form.handle_input(FormInput::NextField);
    form.handle_input(FormInput::NextField);
    type_text(&mut form, "Ruiz");

    let op = form.press_enter().unwrap();
    let Operation::Search(query) = op else {
        panic!("expected a search, got {op:?}");
    };
    assert_eq!(query.pairs(), vec![("last_name", "Ruiz")]);
}

#[test]
fn test_search_not_found_is_success_without_payload() {
    let mut form = Form::new(UseCase::Search);
    type_text(&mut form, "Nadie");
    form.press_enter().unwrap();
    form.receive(Ok(Reply::Found(None)));

    assert!(form.submitted);
    assert_eq!(form.outcome, Some(Outcome::Success(None)));
}

#[test]
fn test_search_found_and_failure_are_terminal() {
    let mut found = Form::new(UseCase::Search);
    type_text(&mut found, "Ana");
    found.press_enter().unwrap();
    found.receive(Ok(Reply::Found(Some(ana()))));
    assert!(found.submitted);
    assert_eq!(found.outcome, Some(Outcome::Success(Some(ana()))));

    let mut failed = Form::new(UseCase::Search);
    type_text(&mut failed, "Ana");
    failed.press_enter().unwrap();
    failed.receive(Err(server_error(500)));
    assert!(failed.submitted);
    assert_eq!(
        failed.outcome,
        Some(Outcome::Failure(FormError::Api(server_error(500))))
    );
}

#[test]
fn test_name_fields_capped_at_32_chars() {
    let mut form = Form::new(UseCase::Delete);
    type_text(&mut form, &"b".repeat(40));
    assert_eq!(form.fields.value(0).chars().count(), 32);
}

#[test]
fn test_delete_sends_only_first_name() {
    let mut form = Form::new(UseCase::Delete);
    type_text(&mut form, "Ana");
    assert_eq!(
        form.press_enter(),
        Some(Operation::Delete(NameQuery::from_fields("Ana", "", "")))
    );
}

#[test]
fn test_delete_failure_still_marks_submitted() {
    let mut form = Form::new(UseCase::Delete);
    type_text(&mut form, "Ana");
    form.press_enter().unwrap();
    form.receive(Err(server_error(404)));
    assert!(form.submitted);
    assert!(matches!(form.outcome, Some(Outcome::Failure(_))));
}

// ============ Update ============

fn update_form_with_match() -> Form {
    let mut form = Form::new(UseCase::Update);
    type_text(&mut form, "ana");
    form.press_enter().unwrap();
    form.receive(Ok(Reply::Found(Some(ana()))));
    form
}

#[test]
fn test_update_searching_phase_cycles_three_fields() {
    let mut form = Form::new(UseCase::Update);
    assert_eq!(form.phase, Phase::Searching);
    assert_eq!(form.active_count(), 3);
    for step in 1..=7 {
        form.handle_input(FormInput::NextField);
        assert_eq!(form.fields.focused_index(), step % 3);
    }
}

#[test]
fn test_update_enters_editing_only_with_a_client() {
    let mut not_found = Form::new(UseCase::Update);
    type_text(&mut not_found, "Nadie");
    not_found.press_enter().unwrap();
    not_found.receive(Ok(Reply::Found(None)));
    assert_eq!(not_found.phase, Phase::Searching);
    assert_eq!(not_found.outcome, Some(Outcome::Success(None)));
    assert!(!not_found.submitted);

    let mut failed = Form::new(UseCase::Update);
    type_text(&mut failed, "Ana");
    failed.press_enter().unwrap();
    failed.receive(Err(server_error(500)));
    assert_eq!(failed.phase, Phase::Searching);
    assert!(!failed.submitted);
    assert!(matches!(failed.outcome, Some(Outcome::Failure(_))));

    let form = update_form_with_match();
    assert_eq!(form.phase, Phase::Editing { original: ana() });
    assert_eq!(form.outcome, None);
    assert!(!form.submitted);
}

#[test]
fn test_update_prefills_email_and_room_exactly() {
    let form = update_form_with_match();
    assert_eq!(form.fields.value(3), "ana@example.com");
    assert_eq!(form.fields.value(4), "204");
    assert_eq!(form.fields.focused_index(), 3);
    assert_eq!(form.active_count(), 5);

    let mut negative = Form::new(UseCase::Update);
    type_text(&mut negative, "x");
    negative.press_enter().unwrap();
    negative.receive(Ok(Reply::Found(Some(Client { room: -7, ..ana() }))));
    assert_eq!(negative.fields.value(4), "-7");
}

#[test]
fn test_update_editing_cycles_five_fields_and_locks_names() {
    let mut form = update_form_with_match();
    for step in 1..=10 {
        form.handle_input(FormInput::NextField);
        assert_eq!(form.fields.focused_index(), (3 + step) % 5);
        assert_eq!(form.fields.iter().filter(|f| f.focused).count(), 1);
    }

    form.fields.focus(0);
    type_text(&mut form, "Zed");
    form.handle_input(FormInput::Backspace);
    assert_eq!(form.fields.value(0), "ana");
}

#[test]
fn test_update_payload_uses_matched_identity() {
    let mut form = update_form_with_match();
    // 即使姓名字段被绕过锁定修改，请求仍使用找到的客户
    if let Some(field) = form.fields.get_mut(0) {
        field.set_value("SOMEONE ELSE");
    }
    form.fields.focus(3);
    for _ in 0.."ana@example.com".len() {
        form.handle_input(FormInput::Backspace);
    }
    type_text(&mut form, "new@example.com");

    let op = form.press_enter().unwrap();
    assert_eq!(
        op,
        Operation::Update(ClientPayload {
            first_name: "Ana".to_string(),
            middle_name: "López".to_string(),
            last_name: "Ruiz".to_string(),
            email: "new@example.com".to_string(),
            room: "204".to_string(),
        })
    );
}

#[test]
fn test_update_result_always_marks_submitted() {
    let mut ok = update_form_with_match();
    ok.press_enter().unwrap();
    ok.receive(Ok(Reply::Updated));
    assert!(ok.submitted);
    assert!(ok.outcome.as_ref().is_some_and(Outcome::is_success));

    let mut failed = update_form_with_match();
    failed.press_enter().unwrap();
    failed.receive(Err(ApiError::Timeout {
        detail: "10s".to_string(),
    }));
    assert!(failed.submitted);
    assert!(matches!(
        failed.outcome,
        Some(Outcome::Failure(FormError::Api(ApiError::Timeout { .. })))
    ));
}
