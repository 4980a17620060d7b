use uuid::Uuid;

/// Identifier stored in a movie document's `id` field.
pub type MovieId = Uuid;

/// Generate a fresh, time-ordered movie identifier.
pub fn new_movie_id() -> MovieId {
    Uuid::now_v7()
}

/// Parse a movie identifier taken from a URL path.
///
/// Anything that is not a valid UUID becomes the nil UUID, which never
/// matches a stored movie. Callers see "no match" rather than a parse error.
pub fn parse_movie_id(raw: &str) -> MovieId {
    Uuid::parse_str(raw).unwrap_or_else(|_| Uuid::nil())
}
