pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Build the movie route table.
///
/// ```text
/// GET    /movies                 list (at most 5)
/// POST   /movie                  create
/// GET    /movie/{param}          get by title
/// PUT    /movie/{param}          update by movie id
/// DELETE /movie/{param}          delete by movie id
/// ```
///
/// The title and movie id share one path pattern, so each handler reads
/// the segment with its own meaning.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list))
        .route("/movie", post(movie::create))
        .route(
            "/movie/{param}",
            get(movie::get_by_title)
                .put(movie::update)
                .delete(movie::delete),
        )
}
