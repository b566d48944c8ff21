use serde_json::json;
use trip_planner_rs::{
    parse_request, BudgetMode, DownloadRequest, PlannerError, RequestSchema, TripRequest,
    TripRequestBody,
};

#[test]
fn test_trip_schema_has_correct_structure() {
    let schema = TripRequestBody::schema().document();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["title"], "TripRequest");

    let props = schema["properties"].as_object().unwrap();
    for field in ["destination", "numPeople", "numDays", "description", "startDate", "endDate"] {
        assert!(props.contains_key(field), "missing {field}");
    }
    assert_eq!(props["numPeople"]["type"], "integer");
    assert_eq!(props["numDays"]["type"], "integer");

    // Every field has a default, so nothing is required at the schema level.
    let required = schema
        .get("required")
        .and_then(|value| value.as_array())
        .map(Vec::len)
        .unwrap_or(0);
    assert_eq!(required, 0);
}

#[test]
fn test_trip_body_defaults_counts_to_one() {
    let body: TripRequestBody = parse_request(&json!({ "destination": "Lisbon" })).unwrap();
    assert_eq!(body.num_people, 1);
    assert_eq!(body.num_days, 1);

    let request = TripRequest::try_from(body).unwrap();
    assert_eq!(request, TripRequest::new("Lisbon", 1, 1));
}

#[test]
fn test_trip_body_rejects_wrong_types() {
    let err = parse_request::<TripRequestBody>(&json!({
        "destination": "Lisbon",
        "numPeople": "two",
        "numDays": 3
    }))
    .unwrap_err();

    assert!(matches!(err, PlannerError::Validation(_)));
    let message = err.to_string();
    assert!(message.starts_with("Request does not match `TripRequest` schema"));
    assert!(message.contains("/numPeople"));

    let err = parse_request::<TripRequestBody>(&json!({ "destination": "Lisbon", "numDays": 2.5 }))
        .unwrap_err();
    assert!(err.to_string().contains("/numDays"));
}

#[test]
fn test_trip_body_rejects_non_object() {
    let err = parse_request::<TripRequestBody>(&json!(["Lisbon"])).unwrap_err();
    assert!(err.to_string().contains("<root>"));
}

#[test]
fn test_trip_body_ignores_unknown_fields() {
    let body: TripRequestBody = parse_request(&json!({
        "destination": "Oslo",
        "numPeople": 3,
        "numDays": 2,
        "budgetMode": "manual",
        "budget": 1200
    }))
    .unwrap();
    assert_eq!(body.destination.as_deref(), Some("Oslo"));
    assert_eq!(body.num_people, 3);
}

#[test]
fn test_download_schema_and_defaults() {
    let schema = DownloadRequest::schema().document();
    assert_eq!(schema["title"], "DownloadRequest");
    let props = schema["properties"].as_object().unwrap();
    for field in ["content", "destination", "budgetInfo", "budgetMode"] {
        assert!(props.contains_key(field), "missing {field}");
    }

    let request: DownloadRequest = parse_request(&json!({ "content": "Day 1" })).unwrap();
    assert_eq!(request.content, "Day 1");
    assert_eq!(request.destination, "Travel");
    assert_eq!(request.budget_info.total_budget, 0.0);
    assert_eq!(request.budget_mode(), BudgetMode::Automatic);
}

#[test]
fn test_download_budget_fields() {
    let request: DownloadRequest = parse_request(&json!({
        "content": "Day 1",
        "destination": "Rome",
        "budgetInfo": { "totalBudget": 2500, "dailyAverage": 833.33, "perPerson": 1250.5 },
        "budgetMode": "manual"
    }))
    .unwrap();

    assert_eq!(request.budget_info.total_budget, 2500.0);
    assert_eq!(request.budget_info.per_person, 1250.5);
    assert_eq!(request.budget_mode(), BudgetMode::Manual);

    let err = parse_request::<DownloadRequest>(&json!({
        "content": "Day 1",
        "budgetInfo": { "totalBudget": "lots" }
    }))
    .unwrap_err();
    assert!(matches!(err, PlannerError::Validation(_)));
    assert!(err.to_string().contains("totalBudget"));
}
