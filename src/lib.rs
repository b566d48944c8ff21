//! trip-planner-rs: an AI travel planner backend
//!
//! Accepts a trip request, asks a hosted language model (Gemini) for a
//! structured travel guide, rewrites `[Place](maps)` markers into map-search
//! links and serves the result over a small HTTP API. Finalized plans can be
//! exported as plain text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trip_planner_rs::{GeminiClient, TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("GOOGLE_API_KEY")?;
//!     let planner = TripPlanner::new(Arc::new(GeminiClient::new(api_key)));
//!
//!     let request = TripRequest::new("Rome", 2, 3).with_description("honeymoon");
//!     let plan = planner.recommend(&request).await?;
//!     println!("{}", plan.html);
//!     Ok(())
//! }
//! ```

extern crate self as trip_planner_rs;

pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub mod server;
pub(crate) mod services;
pub mod types;

pub use config::PlannerConfig;
pub use crate::core::{LinkRewriter, MapsLinkRewriter, TextGenerator, TripPlanner};
pub use error::{PlannerError, Result};
pub use schemas::{parse_request, RequestSchema, SchemaHandle};
pub use server::{build_router, AppState};
pub use services::export::{export_file_name, format_amount, safe_file_name, PlanExport};
pub use services::gemini_client::GeminiClient;
pub use services::prompting::{build_trip_prompt, party_phrase, CONNECTIVITY_PROMPT, PLAN_SECTIONS};
pub use trip_planner_macros::request_schema;
pub use types::{
    ApiTestResponse, BudgetInfo, BudgetMode, ConnectivityReport, DownloadRequest,
    RecommendationsResponse, TripPlanText, TripRequest, TripRequestBody,
};

pub use schemas as schema;

#[cfg(feature = "cli")]
pub mod cli;
