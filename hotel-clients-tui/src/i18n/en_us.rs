//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, ClientCardTexts, CommonTexts, ErrorTexts, FieldLabels, FormTexts, FormTitles,
    HintTexts, KeyNames, MenuTexts, PhaseTexts, ResultTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Hotel Clients",
        error: "Error",
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
            navigate: "Navigate",
            select: "Select",
            next_field: "Next field",
            submit: "Submit",
            back: "Back",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 主菜单
    // ========================================================================
    menu: MenuTexts {
        title: "Client Management",
        register: "Register Client",
        search: "Search Clients",
        update: "Update Clients",
        delete: "Delete Clients",
        footer: "Use the arrow keys to move and Enter to select.",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    forms: FormTexts {
        titles: FormTitles {
            register: "Client Registration",
            search: "Client Search",
            update: "Client Update",
            delete: "Client Deletion",
        },
        labels: FieldLabels {
            first_name: "First Name",
            middle_name: "First Surname",
            last_name: "Second Surname",
            email: "Email",
            room: "Room",
            new_email: "New Email",
            new_room: "New Room",
        },
        phases: PhaseTexts {
            searching: "Step 1: find the client",
            editing: "Step 2: update the details",
            client_found: "Client found:",
        },
        results: ResultTexts {
            heading: "Search result:",
            sending: "Sending request...",
            not_found: "No client was found.",
            registered: "Client registered successfully!",
            updated: "Client updated successfully!",
            deleted: "Client deleted successfully!",
            found: "Client found:",
        },
        card: ClientCardTexts {
            first_name: "First Name",
            middle_name: "First Surname",
            last_name: "Second Surname",
            email: "Email",
            room: "Room",
        },
    },

    // ========================================================================
    // 错误
    // ========================================================================
    errors: ErrorTexts {
        no_criteria: "enter at least one search criterion",
        server_status: "server error:",
        transport: "could not send the request:",
        timeout: "the server did not answer in time",
        decode: "could not process the response:",
        serialization: "could not prepare the request:",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        sending: "Request sent",
        done: "Request completed",
        failed: "Request failed",
        cancelled: "Request cancelled",
    },
};
