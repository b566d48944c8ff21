//! JSON bodies returned by the HTTP surface.

use serde::{Deserialize, Serialize};

/// `POST /get_recommendations` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    /// Plan text with `[Name](maps)` markers turned into anchors.
    pub recommendations: String,
}

/// `GET /test_api` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTestResponse {
    pub success: bool,
    pub message: String,
    pub api_key_preview: String,
}

/// Error body shared by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Outcome of the generation-service connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub success: bool,
    pub message: String,
}
