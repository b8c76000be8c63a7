use std::sync::Arc;

use marquee_adapters::{
    Argon2CredentialHasher, HashMapAccountStore, HashMapMovieStore, HasherConfig, JwtConfig,
    config::test,
};
use marquee_axum::AppState;
use marquee_service::CatalogService;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// Spin up the full service on an ephemeral port, backed by the
/// in-memory stores and a cheap hashing work factor.
pub async fn spawn_app() -> TestApp {
    let accounts = Arc::new(HashMapAccountStore::new());
    let movies = Arc::new(HashMapMovieStore::new());
    let hasher = Arc::new(Argon2CredentialHasher::new(HasherConfig {
        m_cost: test::HASHER_M_COST,
        t_cost: test::HASHER_T_COST,
        p_cost: test::HASHER_P_COST,
    }));
    let jwt = JwtConfig {
        secret: Secret::from("test-signing-secret".to_string()),
        token_ttl_seconds: 600,
    };

    let state = AppState::new(accounts, movies, hasher, jwt);
    let service = CatalogService::new(state);

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .expect("Failed to bind ephemeral port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(service.run(listener));

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

pub fn sample_user(username: &str) -> serde_json::Value {
    serde_json::json!({
        "Username": username,
        "Password": "secret",
        "Email": "a@b.com",
    })
}

impl TestApp {
    pub async fn register(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/users", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&serde_json::json!({ "Username": username, "Password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a fresh user and return a valid bearer token for it.
    pub async fn register_and_login(&self, username: &str) -> String {
        let response = self.register(&sample_user(username)).await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = self
            .login(username, "secret")
            .await
            .json()
            .await
            .expect("Failed to parse login response");
        body["token"]
            .as_str()
            .expect("login response carries no token")
            .to_string()
    }

    pub async fn get_authed(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_authed(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_authed(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{path}", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
