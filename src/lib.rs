//! Exhibition and Component services.
//!
//! Two independent JSON REST APIs, each doing create/list/replace/delete on a
//! single SQLite table. Both are built from this library and started by the
//! `exhibition-service` and `component-service` binaries.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx, one database file per service
//! - **Validation**: explicit per-payload field schema ([`validation`])
//! - **Format**: JSON requests/responses
//! - **Docs**: OpenAPI document at `/swagger.json`, Swagger UI at `/swagger-ui`

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod validation;
