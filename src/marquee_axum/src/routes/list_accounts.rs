use axum::{Json, extract::State, response::IntoResponse};
use marquee_application::ListAccountsUseCase;
use marquee_core::AccountView;

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `GET /users` - list every account view.
#[tracing::instrument(name = "List accounts", skip(state, _caller))]
pub async fn list_accounts(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = ListAccountsUseCase::new(state.accounts.as_ref())
        .execute()
        .await?;

    let views: Vec<AccountView> = accounts.iter().map(|account| account.view()).collect();
    Ok(Json(views))
}
