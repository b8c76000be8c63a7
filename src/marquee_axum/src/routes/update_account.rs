use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use marquee_application::UpdateProfileUseCase;
use marquee_core::{ProfileUpdateCandidate, Username};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// Absent password keeps the stored hash; a present one is
    /// re-validated and re-hashed.
    #[serde(rename = "Password", default)]
    pub password: Option<Secret<String>>,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", default)]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "Death", default)]
    pub death_date: Option<NaiveDate>,
}

/// `PUT /users/{username}` - update the mutable profile fields. The
/// username itself is immutable; the path names the account.
#[tracing::instrument(name = "Update account", skip(state, _caller, request))]
pub async fn update_account(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path(username): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = Username::parse(&username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let use_case = UpdateProfileUseCase::new(state.accounts.as_ref(), state.hasher.as_ref());

    let account = use_case
        .execute(
            &username,
            ProfileUpdateCandidate {
                password: request.password,
                email: request.email,
                birthday: request.birthday,
                death_date: request.death_date,
            },
        )
        .await?;

    Ok(Json(account.view()))
}
