use axum::{Json, extract::State, response::IntoResponse};
use marquee_application::LoginUseCase;
use marquee_adapters::issue_token;
use marquee_core::AccountView;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: AccountView,
    pub token: String,
}

/// `POST /login` - verify credentials and issue a bearer token.
///
/// This is the only place a token is ever issued, and only after the
/// hasher has accepted the password. Unknown username and wrong password
/// are indistinguishable to the caller.
#[tracing::instrument(name = "Login", skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = LoginUseCase::new(state.accounts.as_ref(), state.hasher.as_ref());

    let account = use_case
        .execute(&request.username, request.password)
        .await?;

    let token = issue_token(&account.username, &state.jwt)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        user: account.view(),
        token,
    }))
}
