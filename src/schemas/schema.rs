use std::fmt;

use jsonschema::{Draft, JSONSchema};
use schemars::{
    schema::{RootSchema, Schema},
    JsonSchema,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON schema of a request body, compiled once per type.
pub struct SchemaHandle {
    name: &'static str,
    document: Value,
    validator: Result<JSONSchema, String>,
}

impl SchemaHandle {
    /// Generate, annotate and compile the schema for `T`.
    ///
    /// `field_docs` pairs wire field names with their doc comments.
    pub fn build<T: JsonSchema>(
        name: &'static str,
        description: Option<&'static str>,
        field_docs: &[(&'static str, &'static str)],
    ) -> Self {
        let mut root = schemars::schema_for!(T);
        annotate(&mut root, name, description, field_docs);

        let document = serde_json::to_value(&root).unwrap_or(Value::Null);
        let validator = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|err| err.to_string());

        Self {
            name,
            document,
            validator,
        }
    }

    /// Name used in validation messages, e.g. `TripRequest`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub(crate) fn validator(&self) -> Result<&JSONSchema, &str> {
        self.validator.as_ref().map_err(String::as_str)
    }
}

impl fmt::Debug for SchemaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaHandle")
            .field("name", &self.name)
            .field("compiled", &self.validator.is_ok())
            .finish()
    }
}

/// A request body that is validated against its JSON schema before deserialization.
///
/// Implemented through `#[request_schema]`.
pub trait RequestSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}

// schemars titles the root with the Rust type name; the wire name replaces it.
fn annotate(
    root: &mut RootSchema,
    name: &'static str,
    description: Option<&'static str>,
    field_docs: &[(&'static str, &'static str)],
) {
    let metadata = root.schema.metadata();
    metadata.title = Some(name.to_string());
    if metadata.description.is_none() {
        metadata.description = description.map(str::to_string);
    }

    let Some(object) = root.schema.object.as_mut() else {
        return;
    };
    for (field, doc) in field_docs {
        if let Some(Schema::Object(property)) = object.properties.get_mut(*field) {
            property
                .metadata()
                .description
                .get_or_insert_with(|| (*doc).to_string());
        }
    }
}
