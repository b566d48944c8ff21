//! HTTP route handlers.
//!
//! Handlers stay thin: parse and validate the body, delegate to the planner
//! or the exporter, shape the response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{ACCESS_CONTROL_EXPOSE_HEADERS, CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde_json::Value;
use tracing::{error, info};

use super::{error::ApiError, pages, AppState};
use crate::{
    error::PlannerError,
    schemas::parse_request,
    services::export::PlanExport,
    types::{ApiTestResponse, DownloadRequest, RecommendationsResponse, TripRequest, TripRequestBody},
};

const NO_DATA: &str = "No data provided";

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - Trip planner landing page.
pub async fn index() -> Html<&'static str> {
    Html(pages::INDEX_HTML)
}

/// GET `/test` - Diagnostic page that calls `/test_api`.
pub async fn test_page() -> Html<&'static str> {
    Html(pages::TEST_HTML)
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/test_api` - Round-trip a fixed prompt through the generation service.
pub async fn test_api(State(state): State<Arc<AppState>>) -> Json<ApiTestResponse> {
    let report = state.planner.self_test().await;

    Json(ApiTestResponse {
        success: report.success,
        message: report.message,
        api_key_preview: state.api_key_preview.clone(),
    })
}

/// POST `/get_recommendations` - Generate a map-linked itinerary.
///
/// Request body:
/// ```json
/// {"destination": "Rome", "numPeople": 2, "numDays": 3, "description": "honeymoon",
///  "startDate": "2025-06-01", "endDate": "2025-06-03"}
/// ```
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let payload = read_json_body(&body)?.ok_or_else(|| ApiError::bad_request(NO_DATA))?;
    let body: TripRequestBody = parse_request(&payload)?;
    let request = TripRequest::try_from(body)?;

    info!(
        destination = %request.destination,
        party_size = request.party_size,
        duration_days = request.duration_days,
        start_date = request.start_date.as_deref().unwrap_or("-"),
        end_date = request.end_date.as_deref().unwrap_or("-"),
        "Planning trip"
    );

    let plan = state.planner.recommend(&request).await?;

    Ok(Json(RecommendationsResponse {
        recommendations: plan.html,
    }))
}

/// POST `/download_plan` - Render a finalized plan as a text attachment.
pub async fn download_plan(body: Bytes) -> Result<Response, ApiError> {
    let payload = read_json_body(&body)?
        .filter(|value| !matches!(value, Value::Object(map) if map.is_empty()))
        .ok_or_else(|| ApiError::bad_request(NO_DATA))?;
    let request: DownloadRequest = parse_request(&payload)?;

    let export = PlanExport::render(&request, Local::now().naive_local());

    let disposition = attachment_disposition(&export.file_name).map_err(|err| {
        error!(code = err.error_code(), "Download error: {}", err);
        ApiError::from(err)
    })?;

    info!(file_name = %export.file_name, bytes = export.body.len(), "Rendered plan export");

    Ok((
        StatusCode::OK,
        [
            (
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (CONTENT_DISPOSITION, disposition),
            (
                ACCESS_CONTROL_EXPOSE_HEADERS,
                HeaderValue::from_static("Content-Disposition"),
            ),
        ],
        export.body,
    )
        .into_response())
}

fn attachment_disposition(file_name: &str) -> crate::Result<HeaderValue> {
    let value = format!("attachment; filename=\"{file_name}\"");
    HeaderValue::from_bytes(value.as_bytes()).map_err(|err| {
        PlannerError::Export(format!("cannot send `{file_name}` as a header: {err}"))
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Parse a JSON body; `None` when the body is empty or `null`.
fn read_json_body(body: &[u8]) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|err| ApiError::bad_request(format!("Invalid JSON body: {err}")))?;

    Ok(Some(value).filter(|value| !value.is_null()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_body() {
        assert!(read_json_body(b"").unwrap().is_none());
        assert!(read_json_body(b"  \n").unwrap().is_none());
        assert!(read_json_body(b"null").unwrap().is_none());
        assert_eq!(
            read_json_body(br#"{"a":1}"#).unwrap().unwrap()["a"],
            1
        );

        let err = read_json_body(b"{not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().starts_with("Invalid JSON body"));
    }

    #[test]
    fn test_attachment_disposition() {
        let value = attachment_disposition("Zürich_travel_plan.txt").unwrap();
        assert_eq!(
            value.as_bytes(),
            "attachment; filename=\"Zürich_travel_plan.txt\"".as_bytes()
        );

        let err = attachment_disposition("bad\nname.txt").unwrap_err();
        assert!(matches!(err, PlannerError::Export(_)));

        let api_error = ApiError::from(err);
        assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_error.message().starts_with("Export error: "));
    }
}
