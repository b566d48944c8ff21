mod request_schema;
mod schema_extraction;

use proc_macro::TokenStream;

/// Implements `trip_planner_rs::schema::RequestSchema` for a named struct.
///
/// The struct must also derive `serde::Deserialize` and `schemars::JsonSchema`.
/// Doc comments on the struct and its fields are copied into the generated
/// schema metadata, keyed by the field's wire name (serde `rename` and
/// `rename_all` are honoured).
///
/// ```ignore
/// #[derive(Deserialize, JsonSchema)]
/// #[serde(rename_all = "camelCase")]
/// #[request_schema(name = "TripRequest")]
/// pub struct TripRequestBody {
///     /// City or region to visit
///     pub destination: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn request_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    request_schema::request_schema(attr, item)
}
