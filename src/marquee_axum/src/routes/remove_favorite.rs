use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use marquee_application::RemoveFavoriteUseCase;
use marquee_core::{MovieId, Username};

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `DELETE /users/{username}/favoriteMovies/{movie_id}` - pull a favorite.
///
/// Removes every occurrence of the id; an id that was never a favorite is
/// a 404, distinct from the missing-user 404 only in its message.
#[tracing::instrument(name = "Remove favorite", skip(state, _caller))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let username = Username::parse(&username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    RemoveFavoriteUseCase::new(state.accounts.as_ref())
        .execute(&username, &MovieId::new(movie_id))
        .await?;

    Ok("Movie was removed from favorites")
}
