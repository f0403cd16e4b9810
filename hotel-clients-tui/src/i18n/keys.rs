//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **表单内容归 `forms.*`**：四个表单共用的标签、阶段提示、结果文本
//! 3. **错误文本归 `errors.*`**：由 `ApiError` / 本地校验映射而来
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 主菜单文本
    pub menu: MenuTexts,
    /// 表单文本
    pub forms: FormTexts,
    /// 错误文本
    pub errors: ErrorTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub arrows_ud: &'static str,  // "↑↓"
    pub tab_arrows: &'static str, // "Tab/↑↓"
    pub ctrl_c: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 主菜单
// ============================================================================

/// 主菜单文本
pub struct MenuTexts {
    pub title: &'static str,
    pub register: &'static str,
    pub search: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub footer: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

/// 表单文本
pub struct FormTexts {
    pub titles: FormTitles,
    pub labels: FieldLabels,
    pub phases: PhaseTexts,
    pub results: ResultTexts,
    pub card: ClientCardTexts,
}

/// 各表单标题
pub struct FormTitles {
    pub register: &'static str,
    pub search: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// 字段标签（同时作为占位符）
pub struct FieldLabels {
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub room: &'static str,
    pub new_email: &'static str,
    pub new_room: &'static str,
}

/// 更新表单的阶段提示
pub struct PhaseTexts {
    pub searching: &'static str,
    pub editing: &'static str,
    pub client_found: &'static str,
}

/// 提交结果文本
pub struct ResultTexts {
    pub heading: &'static str,
    pub sending: &'static str,
    pub not_found: &'static str,
    pub registered: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub found: &'static str,
}

/// 搜索结果卡片
pub struct ClientCardTexts {
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub room: &'static str,
}

// ============================================================================
// 错误
// ============================================================================

/// 错误文本
pub struct ErrorTexts {
    pub no_criteria: &'static str,
    /// 后接状态码，例如 "server error: 500"
    pub server_status: &'static str,
    /// 后接传输层错误详情
    pub transport: &'static str,
    pub timeout: &'static str,
    pub decode: &'static str,
    pub serialization: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub sending: &'static str,
    pub done: &'static str,
    pub failed: &'static str,
    pub cancelled: &'static str,
}
