//! End-to-end route tests over the in-memory application state.
//!
//! Each test drives the router the way the UI would: JSON in, JSON
//! out, role in the `X-Role` header.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cadence_api::{app, AppState};
use cadence_assign::{
    EmployeeRecord, EmploymentStatus, InMemoryAssignmentStore, InMemoryDirectory,
};
use cadence_core::{AppraisalId, AssignmentId, DepartmentId, EmployeeId, TemplateId};
use cadence_cycle::InMemoryCycleStore;
use cadence_dispute::{Appraisal, AppraisalStore, InMemoryAppraisalStore, InMemoryDisputeStore};
use cadence_template::InMemoryTemplateStore;

struct TestEnv {
    app: Router,
    appraisals: Arc<InMemoryAppraisalStore>,
    department: DepartmentId,
    employees: Vec<EmployeeId>,
}

fn env() -> TestEnv {
    let department = DepartmentId::new();
    let manager = EmployeeId::new();
    let mut directory = InMemoryDirectory::new();
    // The manager sits outside the department being targeted.
    directory.insert(EmployeeRecord {
        id: manager,
        full_name: "Morgan Manager".to_string(),
        department_id: None,
        manager_id: None,
        status: EmploymentStatus::Active,
    });
    let mut employees = Vec::new();
    for i in 0..5 {
        let id = EmployeeId::new();
        employees.push(id);
        directory.insert(EmployeeRecord {
            id,
            full_name: format!("Employee {i}"),
            department_id: Some(department),
            manager_id: Some(manager),
            status: EmploymentStatus::Active,
        });
    }

    let appraisals = Arc::new(InMemoryAppraisalStore::new());
    let state = AppState::new(
        Arc::new(InMemoryTemplateStore::new()),
        Arc::new(InMemoryCycleStore::new()),
        Arc::new(InMemoryAssignmentStore::new()),
        appraisals.clone(),
        Arc::new(InMemoryDisputeStore::new()),
        Arc::new(directory),
        Arc::new(cadence_api::state::TracingNotifier),
    );

    TestEnv {
        app: app(state),
        appraisals,
        department,
        employees,
    }
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    role: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header("x-role", role);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

fn template_body() -> Value {
    json!({
        "name": "Engineering Annual Review",
        "kind": "ANNUAL",
        "scale": {
            "kind": "FIVE_POINT",
            "min": 1,
            "max": 5,
            "step": 1,
            "labels": ["Poor", "Below", "Meets", "Exceeds", "Outstanding"]
        },
        "criteria": [
            {"key": "delivery", "title": "Delivery", "details": "", "weight": 60.0},
            {"key": "teamwork", "title": "Teamwork", "details": "", "weight": 40.0}
        ],
        "instructions": null
    })
}

fn cycle_body() -> Value {
    json!({
        "name": "Q1 2025 Review",
        "kind": "ANNUAL",
        "start_date": "2025-01-01T00:00:00Z",
        "end_date": "2025-03-31T00:00:00Z",
        "manager_due_date": "2025-04-10T00:00:00Z"
    })
}

async fn create_template(env: &TestEnv) -> String {
    let (status, body) = send(
        &env.app,
        "POST",
        "/performance/templates",
        Some("HR"),
        Some(template_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_active_cycle(env: &TestEnv) -> String {
    let (status, body) = send(
        &env.app,
        "POST",
        "/performance/cycles",
        Some("HR"),
        Some(cycle_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let cycle_id = body["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &env.app,
        "POST",
        &format!("/performance/cycles/{cycle_id}/activate"),
        Some("HR"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    cycle_id
}

#[tokio::test]
async fn health_needs_no_role() {
    let env = env();
    let (status, _) = send(&env.app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_role_header_is_unauthorized() {
    let env = env();
    let (status, _) = send(&env.app, "GET", "/performance/templates", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn employees_cannot_create_templates() {
    let env = env();
    let (status, body) = send(
        &env.app,
        "POST",
        "/performance/templates",
        Some("EMPLOYEE"),
        Some(template_body()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("CREATE_TEMPLATE"));
}

#[tokio::test]
async fn bad_weight_sum_is_rejected_with_the_sum() {
    let env = env();
    let mut body = template_body();
    body["criteria"][1]["weight"] = json!(39.0);
    let (status, response) = send(
        &env.app,
        "POST",
        "/performance/templates",
        Some("HR"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["error"]["message"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn template_toggle_is_idempotent() {
    let env = env();
    let template_id = create_template(&env).await;
    for _ in 0..2 {
        let (status, body) = send(
            &env.app,
            "POST",
            &format!("/performance/templates/{template_id}/toggle"),
            Some("HR"),
            Some(json!({"active": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_active"], json!(false));
    }
}

#[tokio::test]
async fn bad_cycle_timeline_names_the_pair() {
    let env = env();
    let mut body = cycle_body();
    body["end_date"] = json!("2024-12-01T00:00:00Z");
    let (status, response) = send(
        &env.app,
        "POST",
        "/performance/cycles",
        Some("HR"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = response["error"]["message"].as_str().unwrap();
    assert!(message.contains("end_date"));
    assert!(message.contains("start_date"));
}

#[tokio::test]
async fn second_activation_conflicts() {
    let env = env();
    let cycle_id = create_active_cycle(&env).await;
    let (status, _) = send(
        &env.app,
        "POST",
        &format!("/performance/cycles/{cycle_id}/activate"),
        Some("HR"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn editing_an_active_cycle_conflicts() {
    let env = env();
    let cycle_id = create_active_cycle(&env).await;
    let (status, _) = send(
        &env.app,
        "PATCH",
        &format!("/performance/cycles/{cycle_id}"),
        Some("HR"),
        Some(json!({"name": "sneaky rename"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn bulk_assign_department_then_repeat_reports_skips() {
    let env = env();
    let template_id = create_template(&env).await;
    let cycle_id = create_active_cycle(&env).await;

    let request = json!({
        "cycle_id": cycle_id,
        "template_id": template_id,
        "department_ids": [env.department.as_uuid().to_string()],
    });
    let (status, body) = send(
        &env.app,
        "POST",
        "/performance/assignments/bulk",
        Some("HR"),
        Some(request.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created"].as_array().unwrap().len(), 5);
    assert!(body["skipped"].as_array().unwrap().is_empty());

    // Repeat: everyone already assigned, nothing new, all skipped.
    let (status, body) = send(
        &env.app,
        "POST",
        "/performance/assignments/bulk",
        Some("HR"),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["created"].as_array().unwrap().is_empty());
    assert_eq!(body["skipped"].as_array().unwrap().len(), 5);

    let (status, listing) = send(
        &env.app,
        "GET",
        &format!("/performance/cycles/{cycle_id}/assignments"),
        Some("MANAGER"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn bulk_assign_with_both_targets_is_invalid() {
    let env = env();
    let template_id = create_template(&env).await;
    let cycle_id = create_active_cycle(&env).await;

    let (status, _) = send(
        &env.app,
        "POST",
        "/performance/assignments/bulk",
        Some("HR"),
        Some(json!({
            "cycle_id": cycle_id,
            "template_id": template_id,
            "employee_ids": [env.employees[0].as_uuid().to_string()],
            "department_ids": [env.department.as_uuid().to_string()],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn dispute_flow_end_to_end() {
    let env = env();
    let template_id = create_template(&env).await;

    // A finalized appraisal scored 3.2 for the first employee.
    let subject = env.employees[0];
    let appraisal = Appraisal {
        id: AppraisalId::new(),
        assignment_id: AssignmentId::new(),
        template_id: TemplateId::from_uuid(template_id.parse().unwrap()),
        employee_id: subject,
        total_score: 3.2,
        finalized: true,
    };
    let appraisal_id = appraisal.id;
    env.appraisals.insert(appraisal);

    // HR may not file; the evaluated employee may.
    let file_body = json!({
        "appraisal_id": appraisal_id.as_uuid().to_string(),
        "employee_id": subject.as_uuid().to_string(),
        "reason": "score does not reflect Q4 delivery",
    });
    let (status, _) = send(
        &env.app,
        "POST",
        "/performance/disputes",
        Some("HR"),
        Some(file_body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, dispute) = send(
        &env.app,
        "POST",
        "/performance/disputes",
        Some("EMPLOYEE"),
        Some(file_body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dispute["state"], json!("OPEN"));
    assert_eq!(dispute["status_label"], json!("PENDING"));
    let dispute_id = dispute["id"].as_str().unwrap().to_string();

    // ADJUSTED without a score is rejected.
    let (status, _) = send(
        &env.app,
        "POST",
        &format!("/performance/disputes/{dispute_id}/resolve"),
        Some("HR"),
        Some(json!({
            "decision": "ADJUSTED",
            "resolution_summary": "ok",
            "resolved_by": EmployeeId::new().as_uuid().to_string(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // A proper adjustment goes through and rewrites the appraisal.
    let resolve_body = json!({
        "decision": "ADJUSTED",
        "resolution_summary": "manager underweighted Q4 delivery",
        "adjusted_total_score": 3.8,
        "resolved_by": EmployeeId::new().as_uuid().to_string(),
    });
    let (status, resolved) = send(
        &env.app,
        "POST",
        &format!("/performance/disputes/{dispute_id}/resolve"),
        Some("HR"),
        Some(resolve_body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved["state"], json!("ADJUSTED"));
    assert_eq!(env.appraisals.get(appraisal_id).unwrap().total_score, 3.8);

    // Resolving again conflicts and leaves the score alone.
    let (status, _) = send(
        &env.app,
        "POST",
        &format!("/performance/disputes/{dispute_id}/resolve"),
        Some("HR"),
        Some(resolve_body),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(env.appraisals.get(appraisal_id).unwrap().total_score, 3.8);
}
