//! Request payload validation.
//!
//! Bodies are handled in two explicit steps:
//!
//! 1. The raw body is parsed into a JSON object and checked against the
//!    payload's static schema (a list of [`FieldSpec`]s). Every failing field
//!    is collected so the client sees all problems at once.
//! 2. Only a body that passed the schema is deserialized into the typed
//!    payload struct.
//!
//! Handlers take [`ValidatedJson<T>`] instead of `Json<T>` to get both steps,
//! and [`RecordId`] instead of `Path<i64>` so a malformed id gets the same
//! JSON error body as everything else.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// JSON type a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Whole number within i64; `120.0` or `"120"` are rejected.
    Integer,
    /// Any JSON number, integer literals included.
    Number,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            // Must fit the i64 column; larger u64 values are a type error.
            FieldKind::Integer => value.is_i64(),
            FieldKind::Number => value.is_number(),
        }
    }

    fn type_name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
        }
    }
}

/// One required field of a payload schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A request body type with a declared schema.
pub trait Payload: DeserializeOwned {
    /// Fields that must be present, non-null and of the given kind.
    const FIELDS: &'static [FieldSpec];
}

/// Check `body` against `fields`.
///
/// Unknown fields are ignored. `id` is never part of a schema, so a client
/// echoing back a full record is accepted and the id is simply not used.
pub fn validate(body: &Map<String, Value>, fields: &[FieldSpec]) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();

    for field in fields {
        match body.get(field.name) {
            None | Some(Value::Null) => {
                errors.insert(
                    field.name.to_string(),
                    format!("'{}' is a required property", field.name),
                );
            }
            Some(value) if !field.kind.matches(value) => {
                errors.insert(
                    field.name.to_string(),
                    format!("{} is not of type '{}'", value, field.kind.type_name()),
                );
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Validate a parsed JSON value and convert it into `T`.
pub fn parse_payload<T: Payload>(value: Value) -> Result<T, AppError> {
    let Value::Object(body) = value else {
        return Err(AppError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    validate(&body, T::FIELDS)?;

    serde_json::from_value(Value::Object(body))
        .map_err(|err| AppError::InvalidRequest(err.to_string()))
}

/// Axum extractor: JSON body validated against `T::FIELDS`, then typed.
///
/// Rejections (malformed JSON, wrong content type, schema failures) are
/// returned as [`AppError`] so they share the service's error body shape.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Payload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        parse_payload(value).map(ValidatedJson)
    }
}

/// Axum extractor for the `{id}` segment of item routes.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(RecordId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        title: String,
        count: i64,
        weight: f64,
    }

    impl Payload for Sample {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::new("title", FieldKind::String),
            FieldSpec::new("count", FieldKind::Integer),
            FieldSpec::new("weight", FieldKind::Number),
        ];
    }

    fn field_errors(err: AppError) -> BTreeMap<String, String> {
        match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_body() {
        let sample: Sample =
            parse_payload(json!({"title": "bolt", "count": 3, "weight": 2})).unwrap();
        assert_eq!(sample.title, "bolt");
        assert_eq!(sample.count, 3);
        assert_eq!(sample.weight, 2.0);
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = field_errors(parse_payload::<Sample>(json!({})).unwrap_err());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["title"], "'title' is a required property");
    }

    #[test]
    fn null_counts_as_missing() {
        let errors = field_errors(
            parse_payload::<Sample>(json!({"title": null, "count": 1, "weight": 1.5})).unwrap_err(),
        );
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn rejects_wrong_types() {
        let errors = field_errors(
            parse_payload::<Sample>(json!({"title": 7, "count": 1.5, "weight": "heavy"}))
                .unwrap_err(),
        );
        assert_eq!(errors["title"], "7 is not of type 'string'");
        assert_eq!(errors["count"], "1.5 is not of type 'integer'");
        assert_eq!(errors["weight"], "\"heavy\" is not of type 'number'");
    }

    #[test]
    fn integer_beyond_i64_is_a_field_error() {
        let errors = field_errors(
            parse_payload::<Sample>(
                json!({"title": "bolt", "count": 9223372036854775808u64, "weight": 1}),
            )
            .unwrap_err(),
        );
        assert_eq!(
            errors["count"],
            "9223372036854775808 is not of type 'integer'"
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn ignores_unknown_fields_and_id() {
        let sample: Sample = parse_payload(
            json!({"id": 99, "title": "nut", "count": 0, "weight": 0.1, "extra": true}),
        )
        .unwrap();
        assert_eq!(sample.title, "nut");
    }

    #[test]
    fn non_object_body_is_invalid_request() {
        let err = parse_payload::<Sample>(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }
}
