//! Exhibition data models and API request/response types.
//!
//! This module defines:
//! - `Exhibition`: Database entity representing an exhibition
//! - `ExhibitionPayload`: Request body for creating and replacing exhibitions
//! - `ExhibitionResponse`: Response body returned to clients

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Payload};

/// Represents an exhibition record from the database.
///
/// # Database Table
///
/// Maps to the `exhibitions` table. `id` is assigned by SQLite on insert and
/// never changes or gets reused.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Exhibition {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub participants: i64,
}

/// Request body for creating or fully replacing an exhibition.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Art Fair",
///   "date": "2024-05-01",
///   "location": "Hall A",
///   "participants": 120
/// }
/// ```
///
/// # Validation
///
/// All four fields are required. `participants` must be a whole number.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Art Fair",
    "date": "2024-05-01",
    "location": "Hall A",
    "participants": 120
}))]
pub struct ExhibitionPayload {
    /// The name of the exhibition
    pub name: String,
    /// The date of the exhibition
    pub date: String,
    /// The location of the exhibition
    pub location: String,
    /// The number of participants
    pub participants: i64,
}

impl Payload for ExhibitionPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldKind::String),
        FieldSpec::new("date", FieldKind::String),
        FieldSpec::new("location", FieldKind::String),
        FieldSpec::new("participants", FieldKind::Integer),
    ];
}

/// Response body for exhibition endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Art Fair",
///   "date": "2024-05-01",
///   "location": "Hall A",
///   "participants": 120
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ExhibitionResponse {
    /// The unique identifier of an exhibition
    #[schema(read_only)]
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub participants: i64,
}

impl From<Exhibition> for ExhibitionResponse {
    fn from(exhibition: Exhibition) -> Self {
        Self {
            id: exhibition.id,
            name: exhibition.name,
            date: exhibition.date,
            location: exhibition.location,
            participants: exhibition.participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, validation::parse_payload};
    use serde_json::json;

    #[test]
    fn oversized_participants_is_reported_with_other_field_errors() {
        let err = parse_payload::<ExhibitionPayload>(json!({
            "name": "a",
            "date": "b",
            "participants": 9223372036854775808u64
        }))
        .unwrap_err();

        let errors = match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(
            errors["participants"],
            "9223372036854775808 is not of type 'integer'"
        );
        assert_eq!(errors["location"], "'location' is a required property");
    }
}
