use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use marquee_application::DeleteAccountUseCase;
use marquee_core::Username;

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `DELETE /users/{username}` - remove the account unconditionally.
/// Nothing cascades into the catalog.
#[tracing::instrument(name = "Delete account", skip(state, _caller))]
pub async fn delete_account(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let username = Username::parse(&username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    DeleteAccountUseCase::new(state.accounts.as_ref())
        .execute(&username)
        .await?;

    Ok(format!("{username} was deleted."))
}
