//! OpenAPI documents for both services.
//!
//! Each service publishes its own document at `/swagger.json`, with a Swagger
//! UI at `/swagger-ui`.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::{
    app::Service,
    handlers::{components, exhibitions, health},
    models::{
        component::{ComponentPayload, ComponentResponse},
        exhibition::{ExhibitionPayload, ExhibitionResponse},
    },
};

/// Error body returned for not-found, bad request and server errors.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"message": "Exhibition not found"}))]
pub struct MessageBody {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Exhibition API", description = "Create, list, replace and delete exhibitions"),
    paths(
        health::health_check,
        exhibitions::list_exhibitions,
        exhibitions::create_exhibition,
        exhibitions::update_exhibition,
        exhibitions::delete_exhibition,
    ),
    components(schemas(
        ExhibitionPayload,
        ExhibitionResponse,
        health::HealthResponse,
        MessageBody,
    )),
    tags((name = "exhibitions"), (name = "health"))
)]
pub struct ExhibitionsDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Component API", description = "Create, list, replace and delete components"),
    paths(
        health::health_check,
        components::list_components,
        components::create_component,
        components::update_component,
        components::delete_component,
    ),
    components(schemas(
        ComponentPayload,
        ComponentResponse,
        health::HealthResponse,
        MessageBody,
    )),
    tags((name = "components"), (name = "health"))
)]
pub struct ComponentsDoc;

/// The document served by `service`.
pub fn api_doc(service: Service) -> utoipa::openapi::OpenApi {
    match service {
        Service::Exhibitions => ExhibitionsDoc::openapi(),
        Service::Components => ComponentsDoc::openapi(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhibition_doc_covers_every_route() {
        let doc = api_doc(Service::Exhibitions);
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.contains(&&"/exhibitions".to_string()));
        assert!(paths.contains(&&"/exhibitions/{id}".to_string()));
        assert!(paths.contains(&&"/health".to_string()));
        assert!(!paths.iter().any(|p| p.starts_with("/components")));
    }

    #[test]
    fn component_doc_declares_its_schemas() {
        let doc = api_doc(Service::Components);
        let schemas = &doc.components.expect("components section").schemas;
        assert!(schemas.contains_key("ComponentPayload"));
        assert!(schemas.contains_key("ComponentResponse"));
        assert!(!schemas.contains_key("ExhibitionPayload"));
    }
}
