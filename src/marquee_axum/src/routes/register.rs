use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use marquee_application::RegisterUseCase;
use marquee_core::RegistrationCandidate;
use secrecy::Secret;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: Secret<String>,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", default)]
    pub birthday: Option<NaiveDate>,
}

/// `POST /users` - register a new account.
///
/// 201 with the account view on success; 422 with the full violation
/// list; 400 when the username is already taken.
#[tracing::instrument(name = "Register", skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = RegisterUseCase::new(state.accounts.as_ref(), state.hasher.as_ref());

    let account = use_case
        .execute(RegistrationCandidate {
            username: request.username,
            password: request.password,
            email: request.email,
            birthday: request.birthday,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(account.view())))
}
