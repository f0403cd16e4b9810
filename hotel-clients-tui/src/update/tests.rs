#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use hotel_clients_api::{
    ApiError, ApiResult, Client, ClientPayload, HotelApi, NameQuery, Operation, Reply,
};
use ratatui::{backend::TestBackend, Terminal};
use tokio::runtime::Runtime;

use super::update;
use crate::backend::HotelService;
use crate::message::{AppMessage, FormMessage, MenuMessage};
use crate::model::form::tests::ana;
use crate::model::{App, FormError, FormInput, Outcome, Phase, Screen, UseCase};

/// 测试共用的多线程运行时
fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("test runtime"))
}

/// 按顺序返回预设结果的 API，并记录收到的请求
#[derive(Default)]
pub(crate) struct MockApi {
    replies: Mutex<VecDeque<ApiResult<Reply>>>,
    calls: Mutex<Vec<Operation>>,
    delay: Duration,
}

impl MockApi {
    pub(crate) fn with_replies(replies: impl IntoIterator<Item = ApiResult<Reply>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, operation: Operation) -> ApiResult<Reply> {
        self.calls.lock().unwrap().push(operation);
        let reply = self.replies.lock().unwrap().pop_front();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        reply.unwrap_or_else(|| {
            Err(ApiError::Transport {
                detail: "no scripted reply".to_string(),
            })
        })
    }
}

#[async_trait]
impl HotelApi for MockApi {
    async fn create(&self, payload: &ClientPayload) -> ApiResult<Reply> {
        self.answer(Operation::Create(payload.clone())).await
    }

    async fn search(&self, query: &NameQuery) -> ApiResult<Reply> {
        self.answer(Operation::Search(query.clone())).await
    }

    async fn update(&self, payload: &ClientPayload) -> ApiResult<Reply> {
        self.answer(Operation::Update(payload.clone())).await
    }

    async fn delete(&self, query: &NameQuery) -> ApiResult<Reply> {
        self.answer(Operation::Delete(query.clone())).await
    }
}

fn service_for(api: &Arc<MockApi>, timeout: Duration) -> HotelService {
    let api: Arc<dyn HotelApi> = api.clone();
    HotelService::new(api, runtime().handle().clone(), timeout)
}

/// 不会收到任何预设结果的服务，用于只关心按键映射的测试
pub(crate) fn offline_service() -> HotelService {
    service_for(&Arc::new(MockApi::default()), Duration::from_secs(1))
}

fn app_with(api: &Arc<MockApi>) -> App {
    App::new(service_for(api, Duration::from_secs(5)))
}

fn open(app: &mut App, use_case: UseCase) {
    update(app, AppMessage::Menu(MenuMessage::SelectFirst));
    let steps = UseCase::all()
        .iter()
        .position(|u| *u == use_case)
        .unwrap();
    for _ in 0..steps {
        update(app, AppMessage::Menu(MenuMessage::SelectNext));
    }
    update(app, AppMessage::Menu(MenuMessage::Confirm));
    assert_eq!(app.screen(), Screen::Form(use_case));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Form(FormMessage::Input(FormInput::Char(ch))));
    }
}

fn next_field(app: &mut App) {
    update(app, AppMessage::Form(FormMessage::Input(FormInput::NextField)));
}

fn enter(app: &mut App) {
    update(app, AppMessage::Form(FormMessage::Enter));
}

/// 反复 Tick 直到在途请求结束
fn settle(app: &mut App) {
    for _ in 0..300 {
        update(app, AppMessage::Tick);
        if !app.form.as_ref().is_some_and(|form| form.is_pending()) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("request never settled");
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| crate::view::render(app, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn form_outcome(app: &App) -> Option<Outcome> {
    app.form.as_ref().and_then(|form| form.outcome.clone())
}

// ============ 菜单 ============

#[test]
fn test_menu_opens_fresh_form_each_visit() {
    let api = Arc::new(MockApi::default());
    let mut app = app_with(&api);
    assert_eq!(app.screen(), Screen::Menu);

    open(&mut app, UseCase::Search);
    type_text(&mut app, "Ana");
    update(&mut app, AppMessage::Back);
    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.should_quit);

    update(&mut app, AppMessage::Menu(MenuMessage::Confirm));
    let form = app.form.as_ref().unwrap();
    assert_eq!(form.fields.value(0), "");
    assert_eq!(form.outcome, None);
}

#[test]
fn test_back_on_menu_quits() {
    let mut app = App::new(offline_service());
    update(&mut app, AppMessage::Back);
    assert!(app.should_quit);
}

#[test]
fn test_menu_renders_all_items() {
    let mut app = App::new(offline_service());
    update(&mut app, AppMessage::Menu(MenuMessage::SelectLast));
    let screen = render(&app);
    for item in [
        "Register Client",
        "Search Clients",
        "Update Clients",
        "Delete Clients",
    ] {
        assert!(screen.contains(item), "missing {item}:\n{screen}");
    }
    assert!(screen.contains("▶ Delete Clients"));
}

// ============ 登记 ============

#[test]
fn test_register_round_trip() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Created)]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Register);

    for (i, text) in ["Ana", "López", "Ruiz", "ana@example.com", "204"]
        .iter()
        .enumerate()
    {
        if i > 0 {
            next_field(&mut app);
        }
        type_text(&mut app, text);
    }
    enter(&mut app);
    assert_eq!(app.status_message.as_deref(), Some("Request sent"));
    settle(&mut app);

    assert_eq!(
        api.calls(),
        vec![Operation::Create(ClientPayload {
            first_name: "Ana".to_string(),
            middle_name: "López".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            room: "204".to_string(),
        })]
    );
    let form = app.form.as_ref().unwrap();
    assert!(form.submitted);
    assert_eq!(form.fields.value(0), "Ana");
    assert_eq!(app.status_message.as_deref(), Some("Request completed"));

    let screen = render(&app);
    assert!(screen.contains("Client registered successfully!"), "{screen}");
    assert!(screen.contains("ana@example.com"));
}

#[test]
fn test_register_server_error_allows_retry() {
    let api = Arc::new(MockApi::with_replies([
        Err(ApiError::UnexpectedStatus {
            status: 500,
            body: String::new(),
        }),
        Ok(Reply::Created),
    ]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Register);
    for _ in 0..4 {
        enter(&mut app);
    }
    enter(&mut app);
    settle(&mut app);

    assert!(!app.form.as_ref().unwrap().submitted);
    assert_eq!(app.status_message.as_deref(), Some("Request failed"));
    let screen = render(&app);
    assert!(screen.contains("Error: server error: 500"), "{screen}");

    enter(&mut app);
    settle(&mut app);
    assert!(app.form.as_ref().unwrap().submitted);
    assert_eq!(api.calls().len(), 2);
}

// ============ 查找 ============

#[test]
fn test_search_without_criteria_sends_nothing() {
    let api = Arc::new(MockApi::default());
    let mut app = app_with(&api);
    open(&mut app, UseCase::Search);
    enter(&mut app);

    assert!(api.calls().is_empty());
    assert_eq!(
        form_outcome(&app),
        Some(Outcome::Failure(FormError::NoCriteria))
    );
    let screen = render(&app);
    assert!(screen.contains("enter at least one search criterion"), "{screen}");
}

#[test]
fn test_search_shows_client_card() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Found(Some(ana())))]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Search);
    next_field(&mut app);
    type_text(&mut app, "López");
    enter(&mut app);
    settle(&mut app);

    assert_eq!(
        api.calls(),
        vec![Operation::Search(NameQuery::from_fields("", "López", ""))]
    );
    let screen = render(&app);
    assert!(screen.contains("Client found:"), "{screen}");
    assert!(screen.contains("ana@example.com"));
    assert!(screen.contains("204"));
}

#[test]
fn test_search_not_found_notice() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Found(None))]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Search);
    type_text(&mut app, "Nadie");
    enter(&mut app);
    settle(&mut app);

    assert_eq!(form_outcome(&app), Some(Outcome::Success(None)));
    assert!(render(&app).contains("No client was found."));
}

// ============ 更新 ============

#[test]
fn test_update_two_phase_flow() {
    let api = Arc::new(MockApi::with_replies([
        Ok(Reply::Found(Some(ana()))),
        Ok(Reply::Updated),
    ]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Update);
    assert!(render(&app).contains("Step 1: find the client"));

    type_text(&mut app, "ana");
    enter(&mut app);
    settle(&mut app);

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.phase, Phase::Editing { original: ana() });
    assert_eq!(form.fields.focused_index(), 3);
    let screen = render(&app);
    assert!(screen.contains("Step 2: update the details"), "{screen}");
    assert!(screen.contains("Ana López Ruiz"), "{screen}");

    // 把房间号改成 305
    next_field(&mut app);
    for _ in 0..3 {
        update(
            &mut app,
            AppMessage::Form(FormMessage::Input(FormInput::Backspace)),
        );
    }
    type_text(&mut app, "305");
    enter(&mut app);
    settle(&mut app);

    let calls = api.calls();
    assert_eq!(
        calls.last(),
        Some(&Operation::Update(ClientPayload {
            first_name: "Ana".to_string(),
            middle_name: "López".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            room: "305".to_string(),
        }))
    );
    assert!(app.form.as_ref().unwrap().submitted);
    assert!(render(&app).contains("Client updated successfully!"));
}

// ============ 删除 ============

#[test]
fn test_delete_first_name_only() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Deleted)]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Delete);
    type_text(&mut app, "Ana");
    enter(&mut app);
    settle(&mut app);

    assert_eq!(
        api.calls(),
        vec![Operation::Delete(NameQuery::from_fields("Ana", "", ""))]
    );
    assert!(app.form.as_ref().unwrap().submitted);
    assert!(render(&app).contains("Client deleted successfully!"));
}

// ============ 在途请求 ============

#[test]
fn test_enter_while_pending_sends_one_request() {
    let api = Arc::new(
        MockApi::with_replies([Ok(Reply::Deleted)]).delayed(Duration::from_millis(200)),
    );
    let mut app = app_with(&api);
    open(&mut app, UseCase::Delete);
    type_text(&mut app, "Ana");
    enter(&mut app);
    enter(&mut app);
    enter(&mut app);
    assert_eq!(form_outcome(&app), Some(Outcome::Pending));
    assert!(render(&app).contains("Sending request..."));

    settle(&mut app);
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn test_slow_server_times_out() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Deleted)]).delayed(Duration::from_secs(5)));
    let mut app = App::new(service_for(&api, Duration::from_millis(50)));
    open(&mut app, UseCase::Delete);
    type_text(&mut app, "Ana");
    enter(&mut app);
    settle(&mut app);

    assert!(matches!(
        form_outcome(&app),
        Some(Outcome::Failure(FormError::Api(ApiError::Timeout { .. })))
    ));
    assert!(render(&app).contains("the server did not answer in time"));
}

#[test]
fn test_leaving_form_cancels_request() {
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Created)]).delayed(Duration::from_secs(5)));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Register);
    for _ in 0..5 {
        enter(&mut app);
    }
    assert!(app.form.as_ref().unwrap().is_pending());

    update(&mut app, AppMessage::Back);
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.status_message.as_deref(), Some("Request cancelled"));

    // 回到菜单后 Tick 不会有任何影响
    update(&mut app, AppMessage::Tick);
    assert!(app.form.is_none());
}

#[test]
fn test_transport_error_is_rendered_with_detail() {
    let api = Arc::new(MockApi::with_replies([Err(ApiError::Transport {
        detail: "connection refused".to_string(),
    })]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Search);
    type_text(&mut app, "Ana");
    enter(&mut app);
    settle(&mut app);

    let screen = render(&app);
    assert!(
        screen.contains("could not send the request: connection refused"),
        "{screen}"
    );
}

#[test]
fn test_searched_client_is_rendered_in_form_width() {
    let client = Client {
        email: "a.very.long.address.that.keeps.going@example.com".to_string(),
        ..ana()
    };
    let api = Arc::new(MockApi::with_replies([Ok(Reply::Found(Some(client)))]));
    let mut app = app_with(&api);
    open(&mut app, UseCase::Search);
    type_text(&mut app, "Ana");
    enter(&mut app);
    settle(&mut app);
    assert!(render(&app).contains("a.very.long.address"));
}
