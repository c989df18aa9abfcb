use chrono::Duration;
use gatehouse_core::{PasswordResetToken, ResetTokenStore};

use crate::helpers::spawn_app;

#[tokio::test]
async fn forgot_password_sends_a_reset_link() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let response = app
        .post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent = app.email_client.sent.read().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "alice@x.com");
    assert_eq!(sent[0].subject, "Password reset");
    assert!(sent[0].content.contains("/reset-password/"));
}

#[tokio::test]
async fn forgot_password_response_does_not_reveal_account_existence() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let known = app
        .post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let unknown = app
        .post_forgot_password(&serde_json::json!({ "email": "nobody@x.com" }))
        .await;

    assert_eq!(known.status().as_u16(), 200);
    assert_eq!(unknown.status().as_u16(), 200);

    // Same body either way; the reset link travels only by email
    let a: serde_json::Value = known.json().await.unwrap();
    let b: serde_json::Value = unknown.json().await.unwrap();
    assert_eq!(a, b);
    assert!(a["message"].as_str().unwrap().contains("If this email exists"));

    // Only the real account got mail
    assert_eq!(app.email_client.sent.read().await.len(), 1);
}

#[tokio::test]
async fn reset_password_happy_path() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let token = app.last_reset_token().await;

    let response = app
        .post_reset_password(&token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Password reset successful");

    // Old password is dead, new one works
    let old = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await;
    assert_eq!(old.status().as_u16(), 401);

    let new = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "new-password",
        }))
        .await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn reset_token_is_single_use() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let token = app.last_reset_token().await;

    let first = app
        .post_reset_password(&token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app
        .post_reset_password(&token, &serde_json::json!({ "password": "other-password" }))
        .await;
    assert_eq!(second.status().as_u16(), 400);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid token");
}

#[tokio::test]
async fn second_reset_request_invalidates_first_token() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let first_token = app.last_reset_token().await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let second_token = app.last_reset_token().await;
    assert_ne!(first_token, second_token);

    // The first token was replaced and no longer works
    let stale = app
        .post_reset_password(&first_token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(stale.status().as_u16(), 400);
    let body: serde_json::Value = stale.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid token");

    let live = app
        .post_reset_password(&second_token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(live.status().as_u16(), 200);
}

#[tokio::test]
async fn expired_token_is_rejected_then_deleted() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let token = app.last_reset_token().await;

    // Age the stored token past its expiry
    let stored = app.reset_token_store.get_token(&token).await.unwrap();
    let aged = PasswordResetToken::parse(
        stored.id(),
        stored.user_id(),
        stored.email().clone(),
        stored.token().to_string(),
        stored.created_at() - Duration::hours(2),
        stored.expires_at() - Duration::hours(2),
    );
    app.reset_token_store.replace_token(aged).await.unwrap();

    let expired = app
        .post_reset_password(&token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(expired.status().as_u16(), 400);
    let body: serde_json::Value = expired.json().await.unwrap();
    assert_eq!(body["detail"], "Token expired");

    // Detection deleted it; a retry reports it as invalid
    let retry = app
        .post_reset_password(&token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(retry.status().as_u16(), 400);
    let body: serde_json::Value = retry.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid token");

    // The password never changed
    let login = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await;
    assert_eq!(login.status().as_u16(), 200);
}

#[tokio::test]
async fn reset_password_validates_the_new_password() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    app.post_forgot_password(&serde_json::json!({ "email": "alice@x.com" }))
        .await;
    let token = app.last_reset_token().await;

    let response = app
        .post_reset_password(&token, &serde_json::json!({ "password": "short" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["password"].is_array());

    // The token was not consumed by the failed attempt
    let ok = app
        .post_reset_password(&token, &serde_json::json!({ "password": "new-password" }))
        .await;
    assert_eq!(ok.status().as_u16(), 200);
}
