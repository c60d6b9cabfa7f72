//! Component data models and API request/response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Payload};

/// Represents a component record from the `components` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Component {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Request body for creating or fully replacing a component.
///
/// ```json
/// { "name": "Resistor 10k", "category": "passive", "price": 0.05 }
/// ```
///
/// `price` accepts integer literals as well (`3` is read as `3.0`).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ComponentPayload {
    /// The name of the component
    pub name: String,
    /// The category of the component
    pub category: String,
    /// The price of the component
    pub price: f64,
}

impl Payload for ComponentPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldKind::String),
        FieldSpec::new("category", FieldKind::String),
        FieldSpec::new("price", FieldKind::Number),
    ];
}

/// Response body for component endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentResponse {
    #[schema(read_only)]
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl From<Component> for ComponentResponse {
    fn from(component: Component) -> Self {
        Self {
            id: component.id,
            name: component.name,
            category: component.category,
            price: component.price,
        }
    }
}
