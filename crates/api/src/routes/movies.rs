//! Route definitions for the movie catalog.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, merged under `/api`.
///
/// ```text
/// GET    /movies          -> list_movies
/// POST   /movies          -> create_movie
/// GET    /movies/{id}     -> get_movie
/// PUT    /movies/{id}     -> update_movie
/// DELETE /movies/{id}     -> delete_movie
/// ```
///
/// The collection also answers on `/movies/` with a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", collection())
        .route("/movies/", collection())
        .route(
            "/movies/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}

fn collection() -> MethodRouter<AppState> {
    get(movies::list_movies).post(movies::create_movie)
}
