use axum::{
    Router,
    routing::{delete, get, post},
};
use marquee_axum::{AppState, routes};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled catalog-and-account service: every route, wired to one
/// shared [`AppState`].
pub struct CatalogService {
    router: Router,
}

impl CatalogService {
    /// Build the full route table.
    ///
    /// Registration, login and catalog reads are reachable without a
    /// token; every other route runs behind the bearer gate inside its
    /// handler signature.
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/", get(routes::welcome))
            .route("/users", post(routes::register).get(routes::list_accounts))
            .route("/login", post(routes::login))
            .route(
                "/users/{username}",
                get(routes::get_account)
                    .put(routes::update_account)
                    .delete(routes::delete_account),
            )
            .route(
                "/users/{username}/movies/{movie_id}",
                post(routes::add_favorite),
            )
            .route(
                "/users/{username}/favoriteMovies/{movie_id}",
                delete(routes::remove_favorite),
            )
            .route("/movies", get(routes::list_movies).post(routes::add_movie))
            .route("/movies/Genre/{name}", get(routes::movies_by_genre))
            .route("/movies/Director/{name}", get(routes::director_by_name))
            .route(
                "/movies/{title}",
                get(routes::movie_by_title).delete(routes::delete_movie),
            )
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a plain router, e.g. for nesting under another app.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router.layer(CorsLayer::permissive())
    }

    /// Run as a standalone server on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Catalog service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
