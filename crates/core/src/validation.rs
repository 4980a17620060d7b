//! Field-level validation for movie request bodies.

use serde::{Deserialize, Serialize};

use crate::movie::{MovieFields, MovieInput};

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

impl FieldViolation {
    fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule_type: "required".to_string(),
            message: format!("{field} is required"),
        }
    }
}

/// Join violations into one line of text, e.g. for error responses and logs.
pub fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check that `title` and `fullplot` are non-empty and `year` is non-zero.
///
/// Returns the validated fields, or every violation found (in field order)
/// so a client can fix all of them in one round trip.
pub fn validate_movie(input: &MovieInput) -> Result<MovieFields, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = input.title.as_deref().unwrap_or_default();
    if title.is_empty() {
        violations.push(FieldViolation::required("title"));
    }

    let fullplot = input.fullplot.as_deref().unwrap_or_default();
    if fullplot.is_empty() {
        violations.push(FieldViolation::required("fullplot"));
    }

    let year = input.year.unwrap_or_default();
    if year == 0 {
        violations.push(FieldViolation::required("year"));
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(MovieFields {
        title: title.to_string(),
        fullplot: fullplot.to_string(),
        year,
    })
}
