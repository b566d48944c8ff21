//! Request schemas and boundary validation

pub mod schema;
pub mod validation;

pub use schema::{RequestSchema, SchemaHandle};
pub use validation::{parse_request, validate_payload};
