//! Strings for the user management screen.

use catalog_admin_core::Language;

/// Labels on the user management screen.
#[derive(Debug)]
pub struct UsersText {
    pub title: &'static str,
    pub add_user: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
    pub created: &'static str,
    pub last_login: &'static str,
    pub actions: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub special_link: &'static str,
    pub copy_link: &'static str,
    /// Tooltip of the copy button in the user row.
    pub copy_link_title: &'static str,
    /// Alert shown after the link was copied.
    pub link_copied: &'static str,
    /// Browser confirmation before deleting a user.
    pub confirm_delete: &'static str,
    /// Shown when the username field is left blank.
    pub username_required: &'static str,
}

const RU: UsersText = UsersText {
    title: "Управление пользователями",
    add_user: "Добавить пользователя",
    username: "Имя пользователя",
    email: "Email",
    role: "Роль",
    status: "Статус",
    created: "Создан",
    last_login: "Последний вход",
    actions: "Действия",
    active: "Активен",
    inactive: "Неактивен",
    save: "Сохранить",
    cancel: "Отменить",
    edit: "Редактировать",
    delete: "Удалить",
    special_link: "Спец. ссылка",
    copy_link: "Копировать ссылку",
    copy_link_title: "Скопировать ссылку для входа",
    link_copied: "Ссылка для входа скопирована в буфер обмена!",
    confirm_delete: "Вы уверены, что хотите удалить этого пользователя?",
    username_required: "Введите имя пользователя",
};

const EN: UsersText = UsersText {
    title: "User Management",
    add_user: "Add User",
    username: "Username",
    email: "Email",
    role: "Role",
    status: "Status",
    created: "Created",
    last_login: "Last Login",
    actions: "Actions",
    active: "Active",
    inactive: "Inactive",
    save: "Save",
    cancel: "Cancel",
    edit: "Edit",
    delete: "Delete",
    special_link: "Special Link",
    copy_link: "Copy Link",
    copy_link_title: "Copy login link",
    link_copied: "Login link copied to clipboard!",
    confirm_delete: "Are you sure you want to delete this user?",
    username_required: "Enter a username",
};

const CN: UsersText = UsersText {
    title: "用户管理",
    add_user: "添加用户",
    username: "用户名",
    email: "邮箱",
    role: "角色",
    status: "状态",
    created: "创建时间",
    last_login: "最后登录",
    actions: "操作",
    active: "活跃",
    inactive: "非活跃",
    save: "保存",
    cancel: "取消",
    edit: "编辑",
    delete: "删除",
    special_link: "专用链接",
    copy_link: "复制链接",
    copy_link_title: "复制登录链接",
    link_copied: "登录链接已复制到剪贴板！",
    confirm_delete: "确定要删除此用户吗？",
    username_required: "请输入用户名",
};

impl UsersText {
    #[must_use]
    pub const fn get(language: Language) -> &'static Self {
        match language {
            Language::Ru => &RU,
            Language::En => &EN,
            Language::Cn => &CN,
        }
    }
}
