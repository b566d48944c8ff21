use crate::{error::PlannerError, request_schema};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trip request as submitted by the browser client.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[request_schema(name = "TripRequest")]
pub struct TripRequestBody {
    /// City, region or country to plan the trip for
    #[serde(default)]
    pub destination: Option<String>,
    /// Number of travellers in the party
    #[serde(default = "default_count")]
    pub num_people: i64,
    /// Length of the trip in days
    #[serde(default = "default_count")]
    pub num_days: i64,
    /// Free-text notes about the trip (occasion, interests, pace)
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the trip, passed to the model as given
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the trip, passed to the model as given
    #[serde(default)]
    pub end_date: Option<String>,
}

fn default_count() -> i64 {
    1
}

/// A validated trip request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub destination: String,
    pub party_size: u32,
    pub duration_days: u32,
    pub description: String,
    /// Informational only; never checked against `end_date` or the duration.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, party_size: u32, duration_days: u32) -> Self {
        Self {
            destination: destination.into(),
            party_size,
            duration_days,
            description: String::new(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Both ends of the date range, when the client supplied them.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

impl TryFrom<TripRequestBody> for TripRequest {
    type Error = PlannerError;

    fn try_from(body: TripRequestBody) -> Result<Self, Self::Error> {
        let destination = body
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PlannerError::Validation("Please enter a destination".to_string()))?
            .to_string();

        let party_size = positive_count(body.num_people, "Number of people")?;
        let duration_days = positive_count(body.num_days, "Number of days")?;

        Ok(Self {
            destination,
            party_size,
            duration_days,
            description: body.description.unwrap_or_default().trim().to_string(),
            start_date: non_blank(body.start_date),
            end_date: non_blank(body.end_date),
        })
    }
}

fn positive_count(value: i64, label: &str) -> Result<u32, PlannerError> {
    if value < 1 {
        return Err(PlannerError::Validation(format!(
            "{label} must be at least 1"
        )));
    }
    u32::try_from(value)
        .map_err(|_| PlannerError::Validation(format!("{label} is too large")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Generated plan text: the raw model reply and its map-linked rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlanText {
    pub raw: String,
    pub html: String,
}
