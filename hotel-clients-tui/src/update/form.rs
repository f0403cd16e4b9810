//! 表单消息处理

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::{App, Outcome};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    let Some(form) = app.form.as_mut() else {
        return;
    };

    match msg {
        FormMessage::Input(input) => form.handle_input(input),
        FormMessage::Enter => {
            let Some(operation) = form.press_enter() else {
                return;
            };
            let pending = app.service.dispatch(operation);
            form.attach(pending);
            app.set_status(t().status_bar.sending);
        }
    }
}

/// 取回在途请求的结果
pub fn poll(app: &mut App) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    if !form.poll() {
        return;
    }

    let status = match &form.outcome {
        Some(Outcome::Failure(_)) => t().status_bar.failed,
        _ => t().status_bar.done,
    };
    app.set_status(status);
}
