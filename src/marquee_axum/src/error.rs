use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_application::{LoginError, RegisterError, UpdateProfileError};
use marquee_core::{AccountStoreError, MovieStoreError, Violation};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The one client-facing error taxonomy. Every component failure is
/// converted into one of these before it leaves a handler, so status
/// codes stay stable and internal detail stays on the server.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// One uniform 401 for every credential and token failure; which one
    /// occurred is logged server-side only.
    #[error("invalid credentials")]
    Unauthorized,

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "errors": violations })),
            )
                .into_response(),

            ApiError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                    .into_response()
            }

            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message }))
                    .into_response()
            }

            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),

            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountNotFound => ApiError::NotFound("User not found".to_string()),
            AccountStoreError::FavoriteNotFound => {
                ApiError::NotFound("Movie not found in favorites".to_string())
            }
            AccountStoreError::UsernameTaken => {
                ApiError::Conflict("username already exists".to_string())
            }
            AccountStoreError::Unexpected(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<MovieStoreError> for ApiError {
    fn from(error: MovieStoreError) -> Self {
        match error {
            MovieStoreError::MovieNotFound => ApiError::NotFound("Movie not found".to_string()),
            MovieStoreError::Unexpected(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::Validation(violations) => ApiError::Validation(violations),
            RegisterError::UsernameTaken { username } => {
                ApiError::Conflict(format!("{username} already exists"))
            }
            RegisterError::Hasher(e) => ApiError::Internal(e.to_string()),
            RegisterError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::Unauthorized,
            LoginError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::Validation(violations) => ApiError::Validation(violations),
            UpdateProfileError::NotFound => ApiError::NotFound("User not found".to_string()),
            UpdateProfileError::Hasher(e) => ApiError::Internal(e.to_string()),
            UpdateProfileError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
