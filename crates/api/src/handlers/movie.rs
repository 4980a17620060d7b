//! Handlers for the movie resource.
//!
//! `GET /movie/{param}` treats the segment as a title; `PUT` and `DELETE`
//! on the same path treat it as a movie id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use movies_core::movie::{Movie, MovieInput};
use movies_core::store::{bounded, InsertOutcome, LIST_LIMIT};
use movies_core::types::parse_movie_id;
use movies_core::validation::validate_movie;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MovieResponse;
use crate::state::AppState;

const DELETED: &str = "Movie successfully deleted!";
const NOT_FOUND: &str = "Movie with specified ID not found!";

/// GET /movies
///
/// An empty collection is returned as `[]`, never `null`.
pub async fn list(State(state): State<AppState>) -> AppResult<MovieResponse<Vec<Movie>>> {
    let movies = bounded(state.store_timeout(), state.store.find_all(LIST_LIMIT)).await?;
    Ok(MovieResponse::success(StatusCode::OK, movies))
}

/// GET /movie/{title}
///
/// A missing title is reported like any other store failure (500).
pub async fn get_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<MovieResponse<Movie>> {
    let movie = bounded(state.store_timeout(), state.store.find_by_title(&title)).await?;
    Ok(MovieResponse::success(StatusCode::OK, movie))
}

/// POST /movie
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<MovieResponse<InsertOutcome>> {
    let fields = validate_movie(&input).map_err(AppError::Validation)?;
    let movie = Movie::create(fields);

    let outcome = bounded(state.store_timeout(), state.store.insert(&movie)).await?;
    tracing::info!(movie_id = %outcome.inserted_id, title = %movie.title, "Movie created");

    Ok(MovieResponse::success(StatusCode::CREATED, outcome))
}

/// PUT /movie/{movie_id}
///
/// Replaces title, plot and year. When no movie matched, responds 200 with
/// an empty record rather than 404.
pub async fn update(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<MovieResponse<Movie>> {
    let id = parse_movie_id(&movie_id);
    let fields = validate_movie(&input).map_err(AppError::Validation)?;

    let store = &state.store;
    let movie = bounded(state.store_timeout(), async {
        let outcome = store.update(id, &fields).await?;
        if outcome.matched_count == 1 {
            store.find_by_id(id).await
        } else {
            tracing::debug!(%movie_id, "Update matched no movie");
            Ok(Movie::default())
        }
    })
    .await?;

    Ok(MovieResponse::success(StatusCode::OK, movie))
}

/// DELETE /movie/{movie_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<MovieResponse<&'static str>> {
    let id = parse_movie_id(&movie_id);
    let outcome = bounded(state.store_timeout(), state.store.delete(id)).await?;

    if outcome.deleted_count < 1 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(%movie_id, "Movie deleted");
    Ok(MovieResponse::success(StatusCode::OK, DELETED))
}
