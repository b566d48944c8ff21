use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    schemas::{RequestSchema, SchemaHandle},
};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a request payload against a schema
pub fn validate_payload(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let validator = schema.validator().map_err(|err| {
        PlannerError::Config(format!(
            "Failed to prepare `{}` schema for validation: {}",
            schema.name(),
            err
        ))
    })?;

    let Err(errors) = validator.validate(payload) else {
        return Ok(());
    };

    let mut details: Vec<String> = errors
        .take(MAX_SCHEMA_ERRORS + 1)
        .map(|error| {
            let path = error.instance_path.to_string();
            let path = if path.is_empty() { "<root>".to_string() } else { path };
            format!("{}: {}", path, error)
        })
        .collect();

    let truncated = details.len() > MAX_SCHEMA_ERRORS;
    details.truncate(MAX_SCHEMA_ERRORS);

    let mut detail = if details.is_empty() {
        "request body failed schema validation".to_string()
    } else {
        details.join("; ")
    };
    if truncated {
        detail.push_str("; additional errors truncated");
    }

    Err(PlannerError::Validation(format!(
        "Request does not match `{}` schema: {}",
        schema.name(),
        detail
    )))
}

/// Validate `payload` against `T`'s schema and deserialize it.
///
/// Deserialization errors carry the JSON path of the offending value.
pub fn parse_request<T: RequestSchema>(payload: &Value) -> Result<T> {
    let schema = T::schema();
    validate_payload(schema, payload)?;

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path == "." || path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Validation(format!(
            "Invalid `{}` request at {}: {}",
            schema.name(),
            location,
            err.inner()
        ))
    })
}
