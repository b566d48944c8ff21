use chrono::NaiveDateTime;

use crate::types::DownloadRequest;

const RULE: &str = "===========================================";
const DIVIDER: &str = "-------------------------------------------";
const FILE_SUFFIX: &str = "_travel_plan.txt";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A rendered plain-text plan ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanExport {
    pub file_name: String,
    pub body: String,
}

impl PlanExport {
    pub fn render(request: &DownloadRequest, generated_at: NaiveDateTime) -> Self {
        Self {
            file_name: export_file_name(&request.destination),
            body: render_plan_export(request, generated_at),
        }
    }
}

pub fn render_plan_export(request: &DownloadRequest, generated_at: NaiveDateTime) -> String {
    let budget = &request.budget_info;

    format!(
        "
{RULE}
Travel Plan for {destination}
{RULE}

BUDGET OVERVIEW
{DIVIDER}
Budget Mode: {mode} Calculation
Total Budget: ${total}
Daily Average: ${daily}
Per Person: ${per_person}

DAILY BREAKDOWN
{DIVIDER}
{content}

{DIVIDER}
Generated by AI Travel Planner
Date Generated: {generated}
{RULE}
",
        destination = request.destination,
        mode = request.budget_mode().label(),
        total = format_amount(budget.total_budget),
        daily = format_amount(budget.daily_average),
        per_person = format_amount(budget.per_person),
        content = request.content,
        generated = generated_at.format(TIMESTAMP_FORMAT),
    )
}

/// Two decimals with comma-grouped thousands, e.g. `1,234.50` or `-5.00`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Keep alphanumerics, spaces, hyphens and underscores; trim trailing whitespace.
pub fn safe_file_name(destination: &str) -> String {
    destination
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

pub fn export_file_name(destination: &str) -> String {
    format!("{}{}", safe_file_name(destination), FILE_SUFFIX)
}
