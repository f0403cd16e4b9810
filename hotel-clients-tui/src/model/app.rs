//! 应用主状态结构

use crate::backend::HotelService;

use super::{Form, MenuState, Screen, UseCase};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 主菜单状态
    pub menu: MenuState,

    /// 当前表单，`None` 表示停留在菜单
    pub form: Option<Form>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 请求服务
    pub service: HotelService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(service: HotelService) -> Self {
        Self {
            should_quit: false,
            menu: MenuState::new(),
            form: None,
            status_message: None,
            service,
        }
    }

    pub fn screen(&self) -> Screen {
        self.form
            .as_ref()
            .map_or(Screen::Menu, |form| Screen::Form(form.use_case()))
    }

    /// 打开一个全新的表单，丢弃之前的实例
    pub fn open_form(&mut self, use_case: UseCase) {
        log::debug!("Opening {use_case:?} form");
        self.close_form();
        self.form = Some(Form::new(use_case));
    }

    /// 关闭当前表单，回到菜单
    ///
    /// 返回是否中止了在途请求。
    pub fn close_form(&mut self) -> bool {
        let Some(mut form) = self.form.take() else {
            return false;
        };
        let cancelled = form.cancel();
        if cancelled {
            log::info!("Cancelled in-flight {:?} request", form.use_case());
        }
        cancelled
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
