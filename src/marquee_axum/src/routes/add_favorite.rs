use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use marquee_application::AddFavoriteUseCase;
use marquee_core::{MovieId, Username};

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `POST /users/{username}/movies/{movie_id}` - append a favorite.
///
/// The id is taken as-is: whether it names a real catalog entry is the
/// caller's problem, and repeat adds stack up.
#[tracing::instrument(name = "Add favorite", skip(state, _caller))]
pub async fn add_favorite(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let username = Username::parse(&username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let account = AddFavoriteUseCase::new(state.accounts.as_ref())
        .execute(&username, &MovieId::new(movie_id))
        .await?;

    Ok(Json(account.view()))
}
