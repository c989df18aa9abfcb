use crate::helpers::spawn_app;

#[tokio::test]
async fn login_returns_tokens_and_identity() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], "alice@x.com");
    assert_eq!(body["role"], "intern");
    // Both tokens are JWTs
    assert_eq!(body["access"].as_str().unwrap().split('.').count(), 3);
    assert_eq!(body["refresh"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn login_with_matching_role_succeeds() {
    let app = spawn_app().await;
    app.register_user("acme@x.com", "password1", "company").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "acme@x.com",
            "password": "password1",
            "role": "company",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "company");
}

#[tokio::test]
async fn login_with_wrong_role_returns_401_role_mismatch() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
            "role": "company",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid role for this account");
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_input_was_wrong() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let wrong_password = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password2",
        }))
        .await;
    let unknown_email = app
        .post_login(&serde_json::json!({
            "email": "nobody@x.com",
            "password": "password1",
        }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    // Identical bodies for both failure modes
    let a: serde_json::Value = wrong_password.json().await.unwrap();
    let b: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a["detail"], "Invalid email or password");
}

#[tokio::test]
async fn refresh_exchanges_refresh_token_for_new_access_token() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let login: serde_json::Value = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .post_refresh(&serde_json::json!({
            "refresh": login["refresh"],
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["access"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn refresh_rejects_access_token_and_garbage() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let login: serde_json::Value = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await
        .json()
        .await
        .unwrap();

    // An access token is not accepted where a refresh token is expected
    let with_access = app
        .post_refresh(&serde_json::json!({ "refresh": login["access"] }))
        .await;
    assert_eq!(with_access.status().as_u16(), 401);

    let with_garbage = app
        .post_refresh(&serde_json::json!({ "refresh": "not.a.token" }))
        .await;
    assert_eq!(with_garbage.status().as_u16(), 401);
}
