use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use marquee_application::CatalogUseCase;
use marquee_core::{MovieId, NewMovie};

use crate::error::ApiError;
use crate::extract::AuthenticatedAccount;
use crate::state::AppState;

/// `GET /movies` - the whole catalog. Read-only browsing is public.
#[tracing::instrument(name = "List movies", skip(state))]
pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let movies = CatalogUseCase::new(state.movies.as_ref()).list().await?;
    Ok(Json(movies))
}

/// `GET /movies/{title}` - one movie by exact title.
#[tracing::instrument(name = "Get movie by title", skip(state))]
pub async fn movie_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = CatalogUseCase::new(state.movies.as_ref())
        .by_title(&title)
        .await?;
    Ok(Json(movie))
}

/// `GET /movies/Genre/{name}` - every movie carrying the genre; an empty
/// result is a 404, not an empty list.
#[tracing::instrument(name = "Get movies by genre", skip(state))]
pub async fn movies_by_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movies = CatalogUseCase::new(state.movies.as_ref())
        .by_genre(&name)
        .await
        .map_err(|error| match error {
            marquee_core::MovieStoreError::MovieNotFound => {
                ApiError::NotFound("No movies found for this genre".to_string())
            }
            other => other.into(),
        })?;
    Ok(Json(movies))
}

/// `GET /movies/Director/{name}` - a director's profile, extracted from
/// any movie that credits them.
#[tracing::instrument(name = "Get director", skip(state))]
pub async fn director_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let director = CatalogUseCase::new(state.movies.as_ref())
        .director(&name)
        .await
        .map_err(|error| match error {
            marquee_core::MovieStoreError::MovieNotFound => {
                ApiError::NotFound("Director not found".to_string())
            }
            other => other.into(),
        })?;
    Ok(Json(director))
}

/// `POST /movies` - add a catalog entry.
#[tracing::instrument(name = "Add movie", skip(state, _caller, movie))]
pub async fn add_movie(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Json(movie): Json<NewMovie>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = CatalogUseCase::new(state.movies.as_ref()).add(movie).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `DELETE /movies/{id}` - remove a catalog entry.
#[tracing::instrument(name = "Delete movie", skip(state, _caller))]
pub async fn delete_movie(
    State(state): State<AppState>,
    _caller: AuthenticatedAccount,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    CatalogUseCase::new(state.movies.as_ref())
        .remove(&MovieId::new(id))
        .await?;
    Ok("Movie was deleted")
}
