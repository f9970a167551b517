//! List and detail controller integration tests
//!
//! Covers default filters, fatal load handling, confirmation-gated deletes,
//! and status toggles against a wiremock backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use campus_admin::models::{Department, Student, Teacher};
use campus_admin::routes::Route;

use crate::common::{
    ack_envelope, department_record, fail_envelope, ids, ok_envelope, teacher_record,
    ScriptedPrompt, StudentFactory, TeacherFactory, TestApp,
};

#[tokio::test]
async fn test_soft_delete_entity_lists_active_only_by_default() {
    let app = TestApp::new().await;
    let factory = TeacherFactory::new();
    Mock::given(method("GET"))
        .and(path("/teachers"))
        .and(query_param("is_active", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!(factory.batch(3)))),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Teacher>(prompt);
    list.activate().await;
    assert_eq!(list.rows().len(), 3);
}

#[tokio::test]
async fn test_student_rows_expose_display_names() {
    let app = TestApp::new().await;
    let factory = StudentFactory::new();
    Mock::given(method("GET"))
        .and(path("/students"))
        .and(query_param("is_active", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!(factory.batch(2)))),
        )
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Student>(prompt);
    list.activate().await;

    assert_eq!(list.rows().len(), 2);
    assert!(list.rows()[0].admission_number.starts_with("ADM-"));
    assert_eq!(list.view_route(list.rows()[0].id), Route::View("students", 1));
}

#[tokio::test]
async fn test_hard_delete_entity_lists_without_filter() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([department_record(1)]))),
        )
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Department>(prompt);
    list.activate().await;

    assert_eq!(list.rows().len(), 1);
    let requests = app.server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_list_load_failure_notifies_without_navigation() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Department>(prompt);
    list.activate().await;

    assert!(list.rows().is_empty());
    assert_eq!(app.notifier.errors().len(), 1);
    assert!(app.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_detail_load_failure_navigates_to_list() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/teachers/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(true));
    let mut detail = app.detail_controller::<Teacher>(prompt);
    detail.activate(99).await;

    // never a rendered-but-empty detail screen
    assert!(detail.record().is_none());
    assert_eq!(app.navigator.last(), Some(Route::List("teachers")));
    assert_eq!(app.notifier.errors(), vec!["Teacher was not found".to_string()]);
}

#[tokio::test]
async fn test_detail_renders_loaded_record() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/teachers/{}", ids::TEACHER_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(teacher_record(ids::TEACHER_ID))),
        )
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(true));
    let mut detail = app.detail_controller::<Teacher>(prompt);
    detail.activate(ids::TEACHER_ID).await;

    let record = detail.record().unwrap();
    assert_eq!(record.first_name, "Asha");
    assert_eq!(
        detail.edit_route(),
        Some(Route::Edit("teachers", ids::TEACHER_ID))
    );
}

#[tokio::test]
async fn test_declined_confirmation_issues_no_network_call() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([department_record(7)]))),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/departments/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack_envelope()))
        .expect(0)
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Department>(prompt.clone());
    list.activate().await;
    list.delete(7).await;

    // the prompt named the record, the backend was never contacted
    assert_eq!(prompt.asked().len(), 1);
    assert!(prompt.asked()[0].contains("Science"));
    assert!(app.navigator.routes().is_empty());
    assert_eq!(app.request_count().await, 1);
}

#[tokio::test]
async fn test_confirmed_delete_issues_one_call_and_navigates() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([department_record(7)]))),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/departments/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack_envelope()))
        .expect(1)
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(true));
    let mut list = app.list_controller::<Department>(prompt);
    list.activate().await;
    list.delete(7).await;

    assert_eq!(app.navigator.last(), Some(Route::List("departments")));
    assert_eq!(app.notifier.successes().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_failure_stays_on_screen() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/teachers/{}", ids::TEACHER_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(teacher_record(ids::TEACHER_ID))),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/teachers/{}", ids::TEACHER_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fail_envelope("Teacher has active classes")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(true));
    let mut detail = app.detail_controller::<Teacher>(prompt.clone());
    detail.activate(ids::TEACHER_ID).await;
    detail.delete().await;

    // soft-delete entities confirm with deactivation wording
    assert!(prompt.asked()[0].contains("deactivate"));
    assert!(prompt.asked()[0].contains("Asha Verma"));
    // failure leaves the user on the same screen to allow retry
    assert!(detail.record().is_some());
    assert!(app.navigator.routes().is_empty());
    assert_eq!(
        app.notifier.errors(),
        vec!["Teacher has active classes".to_string()]
    );
}

#[tokio::test]
async fn test_toggle_updates_row_in_place() {
    let app = TestApp::new().await;
    let mut inactive = teacher_record(ids::TEACHER_ID);
    inactive["is_active"] = json!(false);
    Mock::given(method("GET"))
        .and(path("/teachers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([teacher_record(ids::TEACHER_ID)]))),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/teachers/{}/toggle-status", ids::TEACHER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(inactive)))
        .expect(1)
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(true));
    let mut list = app.list_controller::<Teacher>(prompt);
    list.activate().await;
    assert!(list.rows()[0].is_active);

    list.toggle(ids::TEACHER_ID).await;
    assert!(!list.rows()[0].is_active);
}

#[tokio::test]
async fn test_late_list_response_is_discarded() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([department_record(1)]))),
        )
        .mount(&app.server)
        .await;

    let prompt = Arc::new(ScriptedPrompt::answering(false));
    let mut list = app.list_controller::<Department>(prompt);
    list.activity().deactivate();
    list.activate().await;

    assert!(list.rows().is_empty());
    assert!(app.notifier.messages().is_empty());
}
