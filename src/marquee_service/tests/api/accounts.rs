use crate::helpers::{sample_user, spawn_app};

#[tokio::test]
async fn registration_returns_the_view_without_any_password_material() {
    let app = spawn_app().await;

    let response = app.register(&sample_user("alice01")).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["Username"], "alice01");
    assert_eq!(body["Email"], "a@b.com");
    assert_eq!(body["FavoriteMovies"], serde_json::json!([]));
    assert!(body.get("Password").is_none());
    assert!(!body.to_string().to_lowercase().contains("password"));
}

#[tokio::test]
async fn invalid_payload_is_422_with_every_violation_listed() {
    let app = spawn_app().await;

    let response = app
        .register(&serde_json::json!({
            "Username": "a-b",
            "Password": "",
            "Email": "nope",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 4);
    let messages: Vec<&str> = errors
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Username is required"));
    assert!(messages.contains(&"Password is required"));
    assert!(messages.contains(&"Email does not appear to be valid"));
}

#[tokio::test]
async fn single_rule_violations_are_reported_individually() {
    let app = spawn_app().await;

    for (payload, expected) in [
        (sample_user("abcd"), "Username is required"),
        (
            sample_user("al ice"),
            "Username contains non alphanumeric characters - not allowed.",
        ),
    ] {
        let response = app.register(&payload).await;
        assert_eq!(response.status().as_u16(), 422);
        let body: serde_json::Value = response.json().await.unwrap();
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1, "payload: {payload}");
        assert_eq!(errors[0]["message"], expected);
    }
}

#[tokio::test]
async fn duplicate_username_is_a_400_conflict() {
    let app = spawn_app().await;

    app.register(&sample_user("alice01")).await;
    let response = app.register(&sample_user("alice01")).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "alice01 already exists");
}

#[tokio::test]
async fn registration_accepts_an_optional_birthday() {
    let app = spawn_app().await;

    let response = app
        .register(&serde_json::json!({
            "Username": "alice01",
            "Password": "secret",
            "Email": "a@b.com",
            "Birthday": "1990-04-01",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["Birthday"], "1990-04-01");
}

#[tokio::test]
async fn profile_update_changes_fields_and_keeps_the_username() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app
        .client
        .put(format!("{}/users/alice01", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "Email": "new@b.com",
            "Birthday": "1990-04-01",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["Username"], "alice01");
    assert_eq!(body["Email"], "new@b.com");
    assert_eq!(body["Birthday"], "1990-04-01");
}

#[tokio::test]
async fn profile_update_with_a_password_rotates_the_credential() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app
        .client
        .put(format!("{}/users/alice01", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "Password": "rotated",
            "Email": "a@b.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.login("alice01", "secret").await.status().as_u16(), 401);
    assert_eq!(app.login("alice01", "rotated").await.status().as_u16(), 200);
}

#[tokio::test]
async fn updating_a_missing_user_is_404_not_422() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app
        .client
        .put(format!("{}/users/nobody1", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "Email": "a@b.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn invalid_update_payload_is_422() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app
        .client
        .put(format!("{}/users/alice01", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "Email": "not-an-email" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn deleted_accounts_are_gone() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app.delete_authed("/users/alice01", &token).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "alice01 was deleted.");

    let response = app.get_authed("/users/alice01", &token).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_a_missing_account_is_404() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app.delete_authed("/users/nobody1", &token).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn the_directory_listing_is_authenticated() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;
    app.register(&sample_user("bobby02")).await;

    let unauthenticated = app
        .client
        .get(format!("{}/users", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthenticated.status().as_u16(), 401);

    let response = app.get_authed("/users", &token).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}
