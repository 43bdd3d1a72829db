//! Integration tests for product editing.

use reqwest::StatusCode;

use catalog_admin_integration_tests::{TestApp, category_url, location};

fn kitchen() -> String {
    category_url("Дом и сад/Кухня")
}

// ============================================================================
// Access
// ============================================================================

#[tokio::test]
async fn test_guest_and_viewer_cannot_edit() {
    let guest = TestApp::spawn().await;
    let resp = guest
        .post_form("/products/8/field", &[("field", "brand"), ("value", "X")])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let viewer = TestApp::logged_in_as(3, "viewer").await;
    let resp = viewer
        .post_form("/products/8/field", &[("field", "brand"), ("value", "X")])
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_field_edit_redirects_back() {
    let app = TestApp::logged_in_as(2, "editor").await;
    let back = kitchen();

    let resp = app
        .post_form(
            "/products/8/field",
            &[
                ("field", "name_ru"),
                ("value", "Набор японских ножей"),
                ("return_to", &back),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), back);

    let (_, body) = app.page(&back).await;
    assert!(body.contains("Набор японских ножей"));
}

#[tokio::test]
async fn test_invalid_field_value_is_rejected() {
    let app = TestApp::logged_in_as(2, "editor").await;

    let resp = app
        .post_form("/products/8/field", &[("field", "price"), ("value", "cheap")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .post_form("/products/8/field", &[("field", "colour"), ("value", "red")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .post_form("/products/999/field", &[("field", "brand"), ("value", "X")])
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_external_return_to_is_ignored() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app
        .post_form(
            "/products/8/field",
            &[
                ("field", "brand"),
                ("value", "Hoff"),
                ("return_to", "https://evil.example/"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_create_product_appears_in_category() {
    let app = TestApp::logged_in_as(2, "editor").await;
    let back = kitchen();

    let resp = app
        .post_form(
            "/products",
            &[
                ("name_en", "Cast Iron Pan"),
                ("name_ru", "Чугунная сковорода"),
                ("price", "2590"),
                ("category", "Дом и сад/Кухня"),
                ("return_to", &back),
            ],
        )
        .await;
    assert_eq!(location(&resp), back);

    let (_, body) = app.page(&back).await;
    assert!(body.contains("Чугунная сковорода"));
    assert!(body.contains("Показано 3 из 3 товаров"));
}

#[tokio::test]
async fn test_create_product_requires_price() {
    let app = TestApp::logged_in_as(2, "editor").await;

    let resp = app
        .post_form("/products", &[("name_en", "Free Thing"), ("price", "0")])
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_price_request_moves_product_to_price_request_category() {
    let app = TestApp::logged_in_as(2, "editor").await;

    let (_, before) = app.page(&category_url("Запрос цены")).await;
    assert!(!before.contains("Набор ножей"));

    let resp = app.post_form("/products/8/price-request", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, after) = app.page(&category_url("Запрос цены")).await;
    assert!(after.contains("Набор ножей"));
    assert!(after.contains("Цена по запросу"));
}

#[tokio::test]
async fn test_additional_categories_make_product_visible() {
    let app = TestApp::logged_in_as(2, "editor").await;

    let resp = app
        .post_form(
            "/products/5/additional-categories",
            &[("categories", "Одежда/Мужская\n\nОдежда/Мужская")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, body) = app.page(&category_url("Одежда/Мужская")).await;
    assert!(body.contains("Беспроводные наушники"));
    assert!(body.contains("Показано 2 из 2 товаров"));
}

#[tokio::test]
async fn test_image_management() {
    let app = TestApp::logged_in_as(2, "editor").await;
    let back = kitchen();

    app.post_form(
        "/products/8/images",
        &[("url", "/static/img/knives.jpg"), ("return_to", &back)],
    )
    .await;
    let (_, body) = app.page(&back).await;
    assert!(body.contains(r#"src="/static/img/knives.jpg""#));
    assert!(body.contains("2 / 2"));

    app.post_form("/products/8/images/navigate", &[("direction", "next")])
        .await;
    let (_, body) = app.page(&back).await;
    assert!(body.contains("1 / 2"));

    let resp = app.post_form("/products/8/images/1/current", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app.post_form("/products/8/images/0/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let (_, body) = app.page(&back).await;
    assert!(!body.contains("2 / 2"));

    let resp = app.post_form("/products/8/images/7/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .post_form("/products/8/images", &[("url", "   ")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
