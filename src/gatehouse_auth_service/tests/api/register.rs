use crate::helpers::spawn_app;

#[tokio::test]
async fn register_returns_201_for_valid_input() {
    let app = spawn_app().await;

    let response = app
        .post_register(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
            "role": "intern",
            "name": "Alice",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = spawn_app().await;
    app.register_user("alice@x.com", "password1", "intern").await;

    let response = app
        .post_register(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password2",
            "role": "company",
            "name": "Alice",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["email"][0].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn register_rejects_invalid_input_with_field_errors() {
    let app = spawn_app().await;

    let cases = [
        (
            serde_json::json!({
                "email": "not-an-email",
                "password": "password1",
                "role": "intern",
                "name": "Alice",
            }),
            "email",
        ),
        (
            serde_json::json!({
                "email": "alice@x.com",
                "password": "short",
                "role": "intern",
                "name": "Alice",
            }),
            "password",
        ),
        (
            serde_json::json!({
                "email": "alice@x.com",
                "password": "password1",
                "role": "admin",
                "name": "Alice",
            }),
            "role",
        ),
    ];

    for (body, field) in cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "field: {}", field);

        let errors: serde_json::Value = response.json().await.unwrap();
        assert!(errors[field].is_array(), "field: {}", field);
    }
}

#[tokio::test]
async fn register_defaults_username_to_email() {
    let app = spawn_app().await;

    // No username in the body; login afterwards proves the account exists
    let response = app
        .post_register(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
            "role": "intern",
            "name": "Alice",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let login = app
        .post_login(&serde_json::json!({
            "email": "alice@x.com",
            "password": "password1",
        }))
        .await;
    assert_eq!(login.status().as_u16(), 200);
}
