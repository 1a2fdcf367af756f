use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let pool = school_fees::db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    let storage = school_fees::db::SchoolStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    school_fees::router::school_router(school_fees::router::SchoolState::new(storage))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not json")
    };
    (status, value)
}

fn asha() -> Value {
    json!({"name": "Asha", "grade": "10", "section": "A", "student_code": "S-100"})
}

#[tokio::test]
async fn root_reports_running() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "School Fee API is running successfully");
}

#[tokio::test]
async fn student_payment_walkthrough() {
    let app = app().await;

    let (status, created) = send(&app, "POST", "/students/", Some(asha())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["student_code"], "S-100");

    let (status, body) = send(&app, "POST", "/students/", Some(asha())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, payment) = send(
        &app,
        "POST",
        "/payments/",
        Some(json!({"student_id": 1, "amount": 500.0, "month": "June", "method": "cash"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "PAID");
    assert!(payment["created_at"].is_string());

    let (status, ack) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["detail"], "Student deleted");

    let (status, body) = send(&app, "GET", "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Student not found");

    // the payment outlives its student
    let (status, stored) = send(&app, "GET", "/payments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["student_id"], 1);
}

#[tokio::test]
async fn payment_for_unknown_student_is_404_and_not_stored() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/payments/",
        Some(json!({"student_id": 9, "amount": 10.0, "month": "May", "method": "bank"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Student not found");

    let (status, list) = send(&app, "GET", "/payments/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_input_is_422() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/students/",
        Some(json!({"name": "Asha", "grade": "10"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        "POST",
        "/fees/",
        Some(json!({"grade": "10", "semester": "", "amount": 100.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        "POST",
        "/fees/",
        Some(json!({"grade": "10", "semester": "Fall", "amount": -5.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "GET", "/students/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_replaces_student_or_404s() {
    let app = app().await;
    send(&app, "POST", "/students/", Some(asha())).await;

    let replacement = json!({"name": "Asha K", "grade": "11", "section": "B", "student_code": "S-101"});
    let (status, updated) = send(&app, "PUT", "/students/1", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["grade"], "11");

    let (_, fetched) = send(&app, "GET", "/students/1", None).await;
    assert_eq!(fetched, updated);

    let (status, _) = send(&app, "PUT", "/students/77", Some(replacement)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn batch_with_duplicate_persists_nothing() {
    let app = app().await;
    let batch = json!([
        {"name": "Asha", "grade": "10", "section": "A", "student_code": "S-1"},
        {"name": "Ravi", "grade": "10", "section": "A", "student_code": "S-1"},
        {"name": "Mina", "grade": "10", "section": "B", "student_code": "S-3"}
    ]);
    let (status, _) = send(&app, "POST", "/students/batch", Some(batch)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn batch_creates_all_students() {
    let app = app().await;
    let batch = json!([
        {"name": "Asha", "grade": "10", "section": "A", "student_code": "S-1"},
        {"name": "Ravi", "grade": "10", "section": "A", "student_code": "S-2"}
    ]);
    let (status, created) = send(&app, "POST", "/students/batch", Some(batch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.as_array().map(Vec::len), Some(2));

    let (_, list) = send(&app, "GET", "/students/", None).await;
    assert_eq!(list, created);
}

#[tokio::test]
async fn fee_lifecycle() {
    let app = app().await;
    let fee = json!({"grade": "10", "semester": "Fall", "amount": 1200.0});
    let (status, created) = send(&app, "POST", "/fees/", Some(fee.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, duplicate) = send(&app, "POST", "/fees/", Some(fee)).await;
    assert_ne!(created["id"], duplicate["id"]);

    let (status, fetched) = send(&app, "GET", "/fees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, ack) = send(&app, "DELETE", "/fees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["detail"], "Fee deleted");

    let (status, body) = send(&app, "GET", "/fees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Fee not found");

    let (_, list) = send(&app, "GET", "/fees/", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}
