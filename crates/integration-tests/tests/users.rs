//! Integration tests for user management and special-link login.

use reqwest::StatusCode;

use catalog_admin_integration_tests::{TestApp, location};

// ============================================================================
// Access
// ============================================================================

#[tokio::test]
async fn test_guest_is_redirected_home() {
    let app = TestApp::spawn().await;

    let resp = app.get("/users").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let app = TestApp::logged_in_as(3, "viewer").await;

    let (status, _) = app.page("/users").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let resp = app.post_form("/users/4/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_sees_user_list() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let (status, body) = app.page("/users").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Управление пользователями"));
    assert!(body.contains("li_wei"));
    assert!(body.contains("data-copy-link"));
}

// ============================================================================
// Special links
// ============================================================================

#[tokio::test]
async fn test_special_link_with_wrong_role_is_ignored() {
    let app = TestApp::spawn().await;

    let resp = app.get("/?auto-login=1&role=viewer").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app.get("/users").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_special_link_for_inactive_user_is_ignored() {
    let app = TestApp::spawn().await;

    app.get("/?auto-login=5&role=broker").await;

    let (_, body) = app.page("/").await;
    assert!(!body.contains("broker"));
}

#[tokio::test]
async fn test_chinese_only_user_gets_chinese_ui() {
    let app = TestApp::logged_in_as(4, "chinese_only").await;

    let (status, body) = app.page("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<html lang="zh-CN">"#));
    assert!(body.contains("li_wei"));
}

#[tokio::test]
async fn test_language_switch_returns_to_page() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/language", &[("language", "en"), ("return_to", "/")])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let (_, body) = app.page("/").await;
    assert!(body.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_logout_clears_user() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app.post_form("/logout", &[]).await;
    assert_eq!(location(&resp), "/");

    let resp = app.get("/users").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[tokio::test]
async fn test_delete_non_admin_removes_user() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app.post_form("/users/4/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/users");

    let (_, body) = app.page("/users").await;
    assert!(!body.contains("li_wei"));
}

#[tokio::test]
async fn test_admin_cannot_be_deleted() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app.post_form("/users/1/delete", &[]).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let (status, body) = app.page("/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("admin@catalog.example"));
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app
        .post_form(
            "/users",
            &[
                ("username", "new_buyer"),
                ("email", "buyer@catalog.example"),
                ("role", "editor"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/users");

    let (_, body) = app.page("/users").await;
    assert!(body.contains("new_buyer"));
    assert!(body.contains("buyer@catalog.example"));
}

#[tokio::test]
async fn test_blank_username_returns_to_form() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app
        .post_form("/users", &[("username", "  "), ("role", "viewer")])
        .await;
    assert_eq!(location(&resp), "/users?add=1&error=username");

    let (_, body) = app.page("/users?add=1&error=username").await;
    assert!(body.contains("Введите имя пользователя"));
}

#[tokio::test]
async fn test_victor_role_cannot_be_assigned() {
    let app = TestApp::logged_in_as(1, "admin").await;

    let resp = app.post_form("/users/3", &[("role", "victor")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Keeping an existing victor as victor is allowed.
    let resp = app
        .post_form("/users/6", &[("username", "victor_k"), ("role", "victor")])
        .await;
    assert_eq!(location(&resp), "/users");

    let (_, body) = app.page("/users").await;
    assert!(body.contains("victor_k"));
}

#[tokio::test]
async fn test_deactivated_user_loses_access() {
    let admin = TestApp::logged_in_as(1, "admin").await;
    let editor = admin.new_session();
    editor.get("/?auto-login=2&role=editor").await;

    let resp = admin.post_form("/users/2", &[("status", "inactive")]).await;
    assert_eq!(location(&resp), "/users");

    let (_, body) = admin.page("/users?edit=2").await;
    assert!(body.contains(r#"<option value="inactive" selected>"#));

    let resp = editor
        .post_form("/products/1/field", &[("field", "brand"), ("value", "X")])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}
