use crate::request_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Finalized plan posted back by the client for a plain-text download.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[request_schema(name = "DownloadRequest")]
pub struct DownloadRequest {
    /// Plan text to embed in the export
    #[serde(default)]
    pub content: String,
    /// Destination name, also used to derive the file name
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Budget figures computed by the client
    #[serde(default)]
    pub budget_info: BudgetInfo,
    /// `manual` when the user typed the budget, anything else means automatic
    #[serde(default = "default_budget_mode")]
    pub budget_mode: String,
}

impl DownloadRequest {
    pub fn budget_mode(&self) -> BudgetMode {
        BudgetMode::from_wire(&self.budget_mode)
    }
}

fn default_destination() -> String {
    "Travel".to_string()
}

fn default_budget_mode() -> String {
    "auto".to_string()
}

/// Client-supplied budget totals; rendered verbatim, never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInfo {
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub daily_average: f64,
    #[serde(default)]
    pub per_person: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMode {
    Manual,
    Automatic,
}

impl BudgetMode {
    pub fn from_wire(value: &str) -> Self {
        if value == "manual" {
            BudgetMode::Manual
        } else {
            BudgetMode::Automatic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetMode::Manual => "Manual",
            BudgetMode::Automatic => "Automatic",
        }
    }
}
