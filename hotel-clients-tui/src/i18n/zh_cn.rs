//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, ClientCardTexts, CommonTexts, ErrorTexts, FieldLabels, FormTexts, FormTitles,
    HintTexts, KeyNames, MenuTexts, PhaseTexts, ResultTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "酒店客户管理",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            arrows_ud: "↑↓",
            tab_arrows: "Tab/↑↓",
            ctrl_c: "Ctrl+C",
        },
        actions: ActionTexts {
            navigate: "导航",
            select: "选择",
            next_field: "下一字段",
            submit: "提交",
            back: "返回",
            quit: "退出",
        },
    },

    // ========================================================================
    // 主菜单
    // ========================================================================
    menu: MenuTexts {
        title: "客户管理",
        register: "登记客户",
        search: "查找客户",
        update: "更新客户",
        delete: "删除客户",
        footer: "使用方向键移动，按 Enter 选择。",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    forms: FormTexts {
        titles: FormTitles {
            register: "客户登记",
            search: "客户查找",
            update: "客户更新",
            delete: "客户删除",
        },
        labels: FieldLabels {
            first_name: "名",
            middle_name: "第一姓氏",
            last_name: "第二姓氏",
            email: "邮箱",
            room: "房间号",
            new_email: "新邮箱",
            new_room: "新房间号",
        },
        phases: PhaseTexts {
            searching: "第一步：查找客户",
            editing: "第二步：更新信息",
            client_found: "已找到客户：",
        },
        results: ResultTexts {
            heading: "查找结果：",
            sending: "正在发送请求...",
            not_found: "未找到该客户。",
            registered: "客户登记成功！",
            updated: "客户更新成功！",
            deleted: "客户删除成功！",
            found: "已找到客户：",
        },
        card: ClientCardTexts {
            first_name: "名",
            middle_name: "第一姓氏",
            last_name: "第二姓氏",
            email: "邮箱",
            room: "房间号",
        },
    },

    // ========================================================================
    // 错误
    // ========================================================================
    errors: ErrorTexts {
        no_criteria: "请至少输入一个查找条件",
        server_status: "服务器错误：",
        transport: "请求发送失败：",
        timeout: "服务器响应超时",
        decode: "无法解析响应：",
        serialization: "无法构造请求：",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        sending: "请求已发送",
        done: "请求完成",
        failed: "请求失败",
        cancelled: "请求已取消",
    },
};
