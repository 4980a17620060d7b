//! Movie record and request DTOs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{new_movie_id, MovieId};

/// A movie document as stored and as returned to clients.
///
/// Empty text fields and a zero year are left out of the JSON output, so a
/// default record serializes as just its (nil) `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: MovieId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fullplot: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: i64,
}

fn is_zero(year: &i64) -> bool {
    *year == 0
}

impl Movie {
    /// Build a new record with a freshly generated identifier.
    pub fn create(fields: MovieFields) -> Self {
        Self {
            id: new_movie_id(),
            title: fields.title,
            fullplot: fields.fullplot,
            year: fields.year,
        }
    }

    /// Replace all mutable fields wholesale. The identifier is untouched.
    pub fn apply(&mut self, fields: &MovieFields) {
        self.title.clone_from(&fields.title);
        self.fullplot.clone_from(&fields.fullplot);
        self.year = fields.year;
    }
}

/// Request body for create and update.
///
/// Every field is optional at the parsing stage; absent or `null` fields are
/// reported by [`validate_movie`](crate::validation::validate_movie) instead
/// of failing deserialization. The body must be a JSON object. Unknown keys
/// are ignored and a repeated key keeps its last value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct MovieInput {
    pub title: Option<String>,
    pub fullplot: Option<String>,
    pub year: Option<i64>,
}

impl TryFrom<Map<String, Value>> for MovieInput {
    type Error = serde_json::Error;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            title: take_field(&mut body, "title")?,
            fullplot: take_field(&mut body, "fullplot")?,
            year: take_field(&mut body, "year")?,
        })
    }
}

fn take_field<T: DeserializeOwned>(
    body: &mut Map<String, Value>,
    name: &str,
) -> Result<Option<T>, serde_json::Error> {
    body.remove(name)
        .map(serde_json::from_value::<Option<T>>)
        .transpose()
        .map(Option::flatten)
}

/// The three mutable fields of a movie, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieFields {
    pub title: String,
    pub fullplot: String,
    pub year: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn inception() -> MovieFields {
        MovieFields {
            title: "Inception".into(),
            fullplot: "A thief who steals secrets...".into(),
            year: 2010,
        }
    }

    #[test]
    fn create_assigns_an_identifier() {
        let movie = Movie::create(inception());
        assert!(!movie.id.is_nil());
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
    }

    #[test]
    fn apply_replaces_every_field_but_id() {
        let mut movie = Movie::create(inception());
        let id = movie.id;
        movie.apply(&MovieFields {
            title: "Tenet".into(),
            fullplot: "Time runs backwards.".into(),
            year: 2020,
        });
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Tenet");
        assert_eq!(movie.fullplot, "Time runs backwards.");
        assert_eq!(movie.year, 2020);
    }

    #[test]
    fn default_movie_serializes_only_the_id() {
        let value = serde_json::to_value(Movie::default()).unwrap();
        assert_eq!(
            value,
            json!({"id": "00000000-0000-0000-0000-000000000000"})
        );
    }

    #[test]
    fn input_tolerates_missing_and_null_fields() {
        let input: MovieInput = serde_json::from_value(json!({"title": null})).unwrap();
        assert!(input.title.is_none());
        assert!(input.fullplot.is_none());
        assert!(input.year.is_none());
    }

    #[test]
    fn input_rejects_wrongly_typed_year() {
        let err = serde_json::from_value::<MovieInput>(json!({"year": "2010"}));
        assert!(err.is_err());
    }

    #[test]
    fn input_must_be_an_object() {
        let array = serde_json::from_str::<MovieInput>(r#"["Heat", "Cops and robbers.", 1995]"#);
        assert!(array.is_err());
        assert!(serde_json::from_str::<MovieInput>("\"Heat\"").is_err());
        assert!(serde_json::from_str::<MovieInput>("null").is_err());
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let input: MovieInput =
            serde_json::from_str(r#"{"title": "A", "title": "B", "year": 1, "year": 2}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("B"));
        assert_eq!(input.year, Some(2));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let input: MovieInput =
            serde_json::from_value(json!({"title": "Heat", "director": "Mann"})).unwrap();
        assert_eq!(input.title.as_deref(), Some("Heat"));
    }
}
