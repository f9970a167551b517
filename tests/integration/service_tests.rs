//! Resource service integration tests
//!
//! Exercises the gateway and the generic service against a wiremock backend:
//! endpoint shapes, envelope decoding, and the error taxonomy.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use campus_admin::models::{Branch, Department, DepartmentForm, Subject};
use campus_admin::services::{ListFilter, ResourceService};
use campus_admin::AppError;

use crate::common::{
    ack_envelope, branch_record, department_record, fail_envelope, ids, ok_envelope, TestApp,
};

#[tokio::test]
async fn test_list_hits_collection_endpoint() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            department_record(1),
            department_record(2)
        ]))))
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let records = service.list(&ListFilter::new()).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Science");
}

#[tokio::test]
async fn test_list_appends_filter_query() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .and(query_param("branch_id", "3"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let filter = ListFilter::new().by("branch_id", 3).by("is_active", "true");
    let records = service.list(&filter).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_get_decodes_embedded_summary() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/departments/{}", ids::DEPARTMENT_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(department_record(ids::DEPARTMENT_ID))),
        )
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let record = service.get(ids::DEPARTMENT_ID).await.unwrap();
    assert_eq!(record.id, ids::DEPARTMENT_ID);
    assert_eq!(record.branch.unwrap().name, "Main Campus");
}

#[tokio::test]
async fn test_get_404_maps_to_not_found_with_label() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let err = service.get(99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref what) if what == "Department"));
}

#[tokio::test]
async fn test_envelope_failure_maps_to_application_error() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/subjects/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fail_envelope("Subject no longer exists")),
        )
        .mount(&app.server)
        .await;

    let service: ResourceService<Subject> = app.state.service();
    let err = service.get(5).await.unwrap_err();
    assert!(matches!(err, AppError::Application(ref m) if m == "Subject no longer exists"));
}

#[tokio::test]
async fn test_server_error_maps_to_transport() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&app.server)
        .await;

    let service: ResourceService<Subject> = app.state.service();
    let err = service.list(&ListFilter::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_envelope_maps_to_transport() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&app.server)
        .await;

    let service: ResourceService<Subject> = app.state.service();
    let err = service.list(&ListFilter::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn test_create_posts_form_data() {
    let app = TestApp::new().await;
    let form = DepartmentForm {
        name: "Science".to_string(),
        head: Some("Dr. Rao".to_string()),
        head_id: None,
        branch_id: 1,
        established_date: "2020-01-01".parse().ok(),
        students_count: 0,
        teachers_count: 0,
        is_active: true,
    };
    Mock::given(method("POST"))
        .and(path("/departments"))
        .and(body_json(json!({
            "name": "Science",
            "head": "Dr. Rao",
            "branch_id": 1,
            "established_date": "2020-01-01",
            "students_count": 0,
            "teachers_count": 0,
            "is_active": true
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(department_record(ids::DEPARTMENT_ID))),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let record = service.create(&form).await.unwrap();
    assert_eq!(record.id, ids::DEPARTMENT_ID);
}

#[tokio::test]
async fn test_update_puts_to_record_endpoint() {
    let app = TestApp::new().await;
    let form = DepartmentForm {
        name: "Applied Science".to_string(),
        head: None,
        head_id: None,
        branch_id: 1,
        established_date: None,
        students_count: 120,
        teachers_count: 9,
        is_active: true,
    };
    Mock::given(method("PUT"))
        .and(path(format!("/departments/{}", ids::DEPARTMENT_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(department_record(ids::DEPARTMENT_ID))),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    service.update(ids::DEPARTMENT_ID, &form).await.unwrap();
}

#[tokio::test]
async fn test_remove_deletes_and_decodes_ack() {
    let app = TestApp::new().await;
    Mock::given(method("DELETE"))
        .and(path("/departments/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack_envelope()))
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    service.remove(7).await.unwrap();
}

#[tokio::test]
async fn test_remove_failure_carries_backend_message() {
    let app = TestApp::new().await;
    Mock::given(method("DELETE"))
        .and(path("/departments/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fail_envelope("Department has assigned subjects")),
        )
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let err = service.remove(7).await.unwrap_err();
    assert!(matches!(err, AppError::Application(ref m) if m == "Department has assigned subjects"));
}

#[tokio::test]
async fn test_toggle_status_hits_toggle_endpoint() {
    let app = TestApp::new().await;
    Mock::given(method("PUT"))
        .and(path(format!("/branches/{}/toggle-status", ids::BRANCH_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(branch_record(ids::BRANCH_ID))),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let service: ResourceService<Branch> = app.state.service();
    let record = service.toggle_status(ids::BRANCH_ID).await.unwrap();
    assert_eq!(record.id, ids::BRANCH_ID);
}

#[tokio::test]
async fn test_repeated_get_is_idempotent() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/departments/{}", ids::DEPARTMENT_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(department_record(ids::DEPARTMENT_ID))),
        )
        .expect(2)
        .mount(&app.server)
        .await;

    let service: ResourceService<Department> = app.state.service();
    let first = service.get(ids::DEPARTMENT_ID).await.unwrap();
    let second = service.get(ids::DEPARTMENT_ID).await.unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
