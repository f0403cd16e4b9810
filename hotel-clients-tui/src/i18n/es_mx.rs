//! 西班牙语翻译 (es-MX)

use super::keys::{
    ActionTexts, ClientCardTexts, CommonTexts, ErrorTexts, FieldLabels, FormTexts, FormTitles,
    HintTexts, KeyNames, MenuTexts, PhaseTexts, ResultTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Clientes del Hotel",
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
            navigate: "Navegar",
            select: "Seleccionar",
            next_field: "Siguiente campo",
            submit: "Enviar",
            back: "Volver",
            quit: "Salir",
        },
    },

    // ========================================================================
    // 主菜单
    // ========================================================================
    menu: MenuTexts {
        title: "Menú de Gestión de Clientes",
        register: "Registrar Cliente",
        search: "Buscar Clientes",
        update: "Actualizar Clientes",
        delete: "Eliminar Clientes",
        footer: "Usa las teclas de dirección para moverte y 'Enter' para seleccionar.",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    forms: FormTexts {
        titles: FormTitles {
            register: "Registro de Cliente",
            search: "Búsqueda de Cliente",
            update: "Actualización de Cliente",
            delete: "Eliminación de Cliente",
        },
        labels: FieldLabels {
            first_name: "Nombre",
            middle_name: "Primer Apellido",
            last_name: "Segundo Apellido",
            email: "Correo",
            room: "Habitación",
            new_email: "Nuevo Correo",
            new_room: "Nueva Habitación",
        },
        phases: PhaseTexts {
            searching: "Fase 1: Búsqueda del cliente",
            editing: "Fase 2: Actualización de datos",
            client_found: "Cliente encontrado:",
        },
        results: ResultTexts {
            heading: "Resultado de la búsqueda:",
            sending: "Enviando petición...",
            not_found: "No se encontró el cliente.",
            registered: "¡Cliente registrado exitosamente!",
            updated: "¡Cliente actualizado exitosamente!",
            deleted: "¡Cliente eliminado exitosamente!",
            found: "Cliente encontrado:",
        },
        card: ClientCardTexts {
            first_name: "Nombre",
            middle_name: "Primer Apellido",
            last_name: "Segundo Apellido",
            email: "Correo Electrónico",
            room: "Habitación",
        },
    },

    // ========================================================================
    // 错误
    // ========================================================================
    errors: ErrorTexts {
        no_criteria: "debe ingresar al menos un criterio de búsqueda",
        server_status: "error del servidor:",
        transport: "error al enviar la petición:",
        timeout: "el servidor no respondió a tiempo",
        decode: "error al procesar la respuesta:",
        serialization: "error al preparar datos:",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        sending: "Petición enviada",
        done: "Petición completada",
        failed: "La petición falló",
        cancelled: "Petición cancelada",
    },
};
