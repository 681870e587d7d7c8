//! Handlers for the `/api/movies` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movie::{MovieChanges, NewMovie};
use marquee_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /api/movies
///
/// List every movie. No pagination and no server-side filtering.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = state.store.list().await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let movie = state.store.find(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// POST /api/movies
///
/// Validate and store a new movie. Repeating the request creates another
/// record.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.check()?;

    let movie = state.store.create(input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Replace the provided fields. An unknown ID responds `200 null` and
/// creates nothing.
pub async fn update_movie(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<MovieChanges>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.check()?;

    let movie = state.store.update(id, input).await?;

    match &movie {
        Some(m) => tracing::info!(movie_id = m.id, "Movie updated"),
        None => tracing::debug!(movie_id = id, "Update for unknown movie ignored"),
    }

    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let deleted = state.store.delete(id).await?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
