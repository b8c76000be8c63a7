use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use marquee_application::GetAccountUseCase;
use marquee_core::Username;

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `GET /users/{username}` - fetch one account view.
#[tracing::instrument(name = "Get account", skip(state, _caller))]
pub async fn get_account(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // A path segment that is not even a well-formed username cannot name
    // an account.
    let username = Username::parse(&username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let account = GetAccountUseCase::new(state.accounts.as_ref())
        .execute(&username)
        .await?;

    Ok(Json(account.view()))
}
