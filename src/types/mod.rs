pub mod export;
pub mod response;
pub mod trip;

pub use export::{BudgetInfo, BudgetMode, DownloadRequest};
pub use response::{ApiTestResponse, ConnectivityReport, ErrorBody, RecommendationsResponse};
pub use trip::{TripPlanText, TripRequest, TripRequestBody};
