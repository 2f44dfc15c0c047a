use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_me_payload() {
    let user: User = serde_json::from_str(r#"{"id":"1","name":"Ana","email":"a@x.com"}"#).unwrap();
    assert_eq!(user, User { id: "1".to_owned(), name: "Ana".to_owned(), email: "a@x.com".to_owned() });
}

#[test]
fn user_initial_is_uppercase_first_char() {
    let user = User { id: "1".to_owned(), name: "ana".to_owned(), email: String::new() };
    assert_eq!(user.initial(), "A");
}

#[test]
fn user_initial_empty_name() {
    let user = User { id: "1".to_owned(), name: String::new(), email: String::new() };
    assert_eq!(user.initial(), "");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn registration_defaults_role() {
    let payload = Registration::new("Ana", "a@x.com", "secret");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "Ana", "email": "a@x.com", "password": "secret", "role": SELF_REGISTERED_ROLE })
    );
}

#[test]
fn new_report_serializes_camel_case() {
    let payload = NewReport {
        student_name: "Bruno".to_owned(),
        incident_date: "2024-03-01".to_owned(),
        incident_description: "Briga no recreio".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["studentName"], "Bruno");
    assert_eq!(json["incidentDate"], "2024-03-01");
    assert_eq!(json["incidentDescription"], "Briga no recreio");
}

#[test]
fn profile_update_omits_password_fields_when_absent() {
    let payload = ProfileUpdate {
        name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        current_password: None,
        new_password: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ana", "email": "a@x.com" }));
}

#[test]
fn upgrade_request_uses_lowercase_plan_id() {
    let json = serde_json::to_value(UpgradeRequest { plan_id: PlanId::Premium }).unwrap();
    assert_eq!(json, serde_json::json!({ "planId": "premium" }));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn report_deserializes_with_optional_ai_report_missing() {
    let report: Report = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "studentName": "Bruno",
        "incidentDate": "2024-03-01T10:00:00Z",
        "incidentDescription": "Briga",
        "status": "pending",
        "createdAt": "2024-03-01T11:00:00Z"
    }))
    .unwrap();
    assert_eq!(report.status, ReportStatus::Pending);
    assert!(report.ai_report.is_none());
}

#[test]
fn report_list_tolerates_unknown_status() {
    let raw = r#"[
        {"id":"r1","studentName":"Bruno","incidentDate":"","incidentDescription":"","status":"completed","createdAt":""},
        {"id":"r2","studentName":"Carla","incidentDate":"","incidentDescription":"","status":"processing","createdAt":""}
    ]"#;
    let reports = crate::net::http::decode_body::<Vec<Report>>(200, raw).unwrap().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].status, ReportStatus::Completed);
    assert_eq!(reports[1].status, ReportStatus::Unknown);
}

#[test]
fn profile_defaults_missing_usage_fields() {
    let profile: UserProfile =
        serde_json::from_value(serde_json::json!({ "id": "1", "name": "Ana", "email": "a@x.com" })).unwrap();
    assert_eq!(profile.plan, PlanId::Free);
    assert_eq!(profile.reports_used, 0);
    assert_eq!(profile.reports_limit, 0);
    assert!(profile.plan_expires_at.is_none());
}

#[test]
fn upgrade_checkout_without_url() {
    let checkout: UpgradeCheckout = serde_json::from_str("{}").unwrap();
    assert!(checkout.checkout_url.is_none());
}
