use crate::helpers::{sample_user, spawn_app};

#[tokio::test]
async fn login_with_correct_password_yields_a_token() {
    let app = spawn_app().await;
    app.register(&sample_user("alice01")).await;

    let response = app.login("alice01", "secret").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["Username"], "alice01");
    assert!(body["user"].get("Password").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_is_401_and_issues_no_token() {
    let app = spawn_app().await;
    app.register(&sample_user("alice01")).await;

    let response = app.login("alice01", "wrong").await;
    assert_eq!(response.status().as_u16(), 401);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn unknown_username_fails_like_a_wrong_password() {
    let app = spawn_app().await;
    app.register(&sample_user("alice01")).await;

    let wrong_password = app.login("alice01", "wrong").await;
    let unknown_user = app.login("mallory1", "secret").await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);
    assert_eq!(
        wrong_password.json::<serde_json::Value>().await.unwrap(),
        unknown_user.json::<serde_json::Value>().await.unwrap(),
    );
}

#[tokio::test]
async fn protected_routes_reject_missing_and_invalid_tokens() {
    let app = spawn_app().await;
    app.register(&sample_user("alice01")).await;

    let missing = app
        .client
        .get(format!("{}/users/alice01", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 401);

    let garbage = app.get_authed("/users/alice01", "not.a.token").await;
    assert_eq!(garbage.status().as_u16(), 401);

    let wrong_scheme = app
        .client
        .get(format!("{}/users/alice01", app.address))
        .header("Authorization", "Basic abc123")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_scheme.status().as_u16(), 401);
}

#[tokio::test]
async fn a_fresh_token_grants_access_to_protected_routes() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app.get_authed("/users/alice01", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["Username"], "alice01");
}

#[tokio::test]
async fn a_token_signed_with_another_key_is_rejected() {
    let app = spawn_app().await;
    app.register(&sample_user("alice01")).await;

    // Issued by a different deployment: right shape, wrong signature.
    let forged = {
        use marquee_adapters::{JwtConfig, issue_token};
        use secrecy::Secret;
        issue_token(
            &marquee_core::Username::parse("alice01").unwrap(),
            &JwtConfig {
                secret: Secret::from("some-other-secret".to_string()),
                token_ttl_seconds: 600,
            },
        )
        .unwrap()
    };

    let response = app.get_authed("/users/alice01", &forged).await;
    assert_eq!(response.status().as_u16(), 401);
}
