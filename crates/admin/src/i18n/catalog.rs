//! Strings for the category page, product cards and the "add product" form.

use catalog_admin_core::Language;

/// Labels on catalog pages.
#[derive(Debug)]
pub struct CatalogText {
    pub catalog: &'static str,
    pub users: &'static str,
    pub logout: &'static str,
    pub language: &'static str,
    pub home: &'static str,
    pub back: &'static str,
    pub go_back: &'static str,
    pub categories: &'static str,

    pub category_not_found: &'static str,
    pub category_not_found_hint: &'static str,
    pub no_products: &'static str,
    pub no_products_hint: &'static str,
    pub show_per_page: &'static str,
    pub products_unit: &'static str,
    pub previous: &'static str,
    pub next: &'static str,

    pub add_product: &'static str,
    pub name_en: &'static str,
    pub name_cn: &'static str,
    pub name_ru: &'static str,
    pub price: &'static str,
    pub price_on_request: &'static str,
    pub request_price: &'static str,
    pub sku: &'static str,
    pub quantity: &'static str,
    pub brand: &'static str,
    pub web_link: &'static str,
    pub category: &'static str,
    pub additional_categories: &'static str,
    pub additional_categories_hint: &'static str,
    pub description: &'static str,
    pub description_en: &'static str,
    pub description_cn: &'static str,
    pub tnved: &'static str,
    pub material: &'static str,
    pub purpose: &'static str,
    pub for_whom: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,

    pub images: &'static str,
    pub image_url: &'static str,
    pub add_image: &'static str,
    pub previous_image: &'static str,
    pub next_image: &'static str,
    pub make_current: &'static str,
    pub delete_image: &'static str,
    pub confirm_delete_image: &'static str,

    pub welcome: &'static str,
    pub not_logged_in: &'static str,
    pub forbidden: &'static str,
}

const RU: CatalogText = CatalogText {
    catalog: "Каталог",
    users: "Пользователи",
    logout: "Выйти",
    language: "Язык",
    home: "На главную",
    back: "Назад",
    go_back: "Вернуться назад",
    categories: "Категории",

    category_not_found: "Категория не найдена",
    category_not_found_hint: "Запрашиваемая категория не существует или была удалена.",
    no_products: "Товары не найдены",
    no_products_hint: "В данной категории пока нет товаров.",
    show_per_page: "Показывать по:",
    products_unit: "товаров",
    previous: "Назад",
    next: "Вперёд",

    add_product: "Добавить товар",
    name_en: "Название (англ.)",
    name_cn: "Название (кит.)",
    name_ru: "Название (рус.)",
    price: "Цена",
    price_on_request: "Цена по запросу",
    request_price: "Запрос цены",
    sku: "Артикул",
    quantity: "Количество",
    brand: "Бренд",
    web_link: "Ссылка",
    category: "Категория",
    additional_categories: "Дополнительные категории",
    additional_categories_hint: "По одной категории в строке",
    description: "Описание (рус.)",
    description_en: "Описание (англ.)",
    description_cn: "Описание (кит.)",
    tnved: "ТН ВЭД",
    material: "Материал",
    purpose: "Назначение",
    for_whom: "Для кого",
    save: "Сохранить",
    cancel: "Отменить",
    edit: "Редактировать",

    images: "Изображения",
    image_url: "URL изображения",
    add_image: "Добавить изображение",
    previous_image: "Предыдущее изображение",
    next_image: "Следующее изображение",
    make_current: "Сделать основным",
    delete_image: "Удалить изображение",
    confirm_delete_image: "Удалить это изображение?",

    welcome: "Добро пожаловать",
    not_logged_in: "Войдите по специальной ссылке, чтобы работать с каталогом.",
    forbidden: "Недостаточно прав для этого действия.",
};

const EN: CatalogText = CatalogText {
    catalog: "Catalog",
    users: "Users",
    logout: "Log out",
    language: "Language",
    home: "Home",
    back: "Back",
    go_back: "Go back",
    categories: "Categories",

    category_not_found: "Category not found",
    category_not_found_hint: "The requested category does not exist or has been removed.",
    no_products: "No products found",
    no_products_hint: "There are no products in this category yet.",
    show_per_page: "Show:",
    products_unit: "products",
    previous: "Previous",
    next: "Next",

    add_product: "Add Product",
    name_en: "Name (EN)",
    name_cn: "Name (CN)",
    name_ru: "Name (RU)",
    price: "Price",
    price_on_request: "Price on request",
    request_price: "Price request",
    sku: "SKU",
    quantity: "Quantity",
    brand: "Brand",
    web_link: "Web link",
    category: "Category",
    additional_categories: "Additional categories",
    additional_categories_hint: "One category per line",
    description: "Description (RU)",
    description_en: "Description (EN)",
    description_cn: "Description (CN)",
    tnved: "HS code",
    material: "Material",
    purpose: "Purpose",
    for_whom: "For whom",
    save: "Save",
    cancel: "Cancel",
    edit: "Edit",

    images: "Images",
    image_url: "Image URL",
    add_image: "Add image",
    previous_image: "Previous image",
    next_image: "Next image",
    make_current: "Make main",
    delete_image: "Delete image",
    confirm_delete_image: "Delete this image?",

    welcome: "Welcome",
    not_logged_in: "Log in with your special link to work with the catalog.",
    forbidden: "You do not have permission for this action.",
};

const CN: CatalogText = CatalogText {
    catalog: "目录",
    users: "用户",
    logout: "退出",
    language: "语言",
    home: "首页",
    back: "返回",
    go_back: "返回上一页",
    categories: "分类",

    category_not_found: "未找到分类",
    category_not_found_hint: "请求的分类不存在或已被删除。",
    no_products: "未找到商品",
    no_products_hint: "此分类中暂无商品。",
    show_per_page: "每页显示：",
    products_unit: "件商品",
    previous: "上一页",
    next: "下一页",

    add_product: "添加商品",
    name_en: "名称（英文）",
    name_cn: "名称（中文）",
    name_ru: "名称（俄文）",
    price: "价格",
    price_on_request: "价格面议",
    request_price: "询价",
    sku: "货号",
    quantity: "数量",
    brand: "品牌",
    web_link: "链接",
    category: "分类",
    additional_categories: "附加分类",
    additional_categories_hint: "每行一个分类",
    description: "描述（俄文）",
    description_en: "描述（英文）",
    description_cn: "描述（中文）",
    tnved: "海关编码",
    material: "材质",
    purpose: "用途",
    for_whom: "适用人群",
    save: "保存",
    cancel: "取消",
    edit: "编辑",

    images: "图片",
    image_url: "图片链接",
    add_image: "添加图片",
    previous_image: "上一张图片",
    next_image: "下一张图片",
    make_current: "设为主图",
    delete_image: "删除图片",
    confirm_delete_image: "删除这张图片？",

    welcome: "欢迎",
    not_logged_in: "请使用专用链接登录以管理目录。",
    forbidden: "您没有执行此操作的权限。",
};

impl CatalogText {
    #[must_use]
    pub const fn get(language: Language) -> &'static Self {
        match language {
            Language::Ru => &RU,
            Language::En => &EN,
            Language::Cn => &CN,
        }
    }

    /// Header line under the category name.
    #[must_use]
    pub fn showing_sorted(language: Language, shown: usize, total: usize) -> String {
        match language {
            Language::Ru => format!(
                "Показано {shown} из {total} товаров (отсортированы по дате создания)"
            ),
            Language::En => {
                format!("Showing {shown} of {total} products (sorted by creation date)")
            }
            Language::Cn => format!("显示 {shown} / {total} 件商品（按创建日期排序）"),
        }
    }

    /// "Page p of P".
    #[must_use]
    pub fn page_of(language: Language, page: usize, total_pages: usize) -> String {
        match language {
            Language::Ru => format!("Страница {page} из {total_pages}"),
            Language::En => format!("Page {page} of {total_pages}"),
            Language::Cn => format!("第 {page} 页，共 {total_pages} 页"),
        }
    }

    /// Item range shown next to the page links.
    #[must_use]
    pub fn showing_range(language: Language, first: usize, last: usize, total: usize) -> String {
        match language {
            Language::Ru => format!("Показано {first}–{last} из {total} товаров"),
            Language::En => format!("Showing {first}–{last} of {total} products"),
            Language::Cn => format!("显示第 {first}–{last} 件，共 {total} 件商品"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries() {
        assert_eq!(
            CatalogText::showing_sorted(Language::Ru, 25, 60),
            "Показано 25 из 60 товаров (отсортированы по дате создания)"
        );
        assert_eq!(CatalogText::page_of(Language::En, 2, 3), "Page 2 of 3");
        assert_eq!(
            CatalogText::showing_range(Language::Ru, 26, 50, 60),
            "Показано 26–50 из 60 товаров"
        );
    }
}
