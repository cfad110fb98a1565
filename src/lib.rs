//! # Course Library - Authors and Courses over REST
//!
//! A REST API exposing authors and their nested courses, backed by an
//! in-memory repository, built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: entities, value objects, domain errors
//! - **Application**: DTOs, validation, JSON-Patch, ports and use cases
//! - **Infrastructure**: the in-memory repository adapter
//! - **API**: HTTP handlers, router, error translation, OpenAPI
//!
//! ## Key Features
//!
//! - Upsert semantics: PUT/PATCH to a missing course creates it under the
//!   client-supplied id and answers 201
//! - JSON-Patch partial updates validated as whole documents before commit
//! - Aggregated validation: every failed rule of a payload in one response,
//!   including the cross-field title/description rule
//! - Author deletion cascades to owned courses

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, patch, ports, use_cases, validation};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
