mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_complex(app: &TestApp) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/complexes")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Seven", "address": "Ruta 8 km 42"}).to_string())).unwrap()
    ).await.unwrap();
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn create_rate(app: &TestApp, cid: &str, name: &str, price: f64) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/rates", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": name, "price": price, "reservation_amount": price / 2.0}).to_string())).unwrap()
    ).await.unwrap();
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_schedule_with_ordered_rates() {
    let app = TestApp::new().await;
    let cid = create_complex(&app).await;
    let r1 = create_rate(&app, &cid, "Diurno", 4000.0).await;
    let r2 = create_rate(&app, &cid, "Nocturno", 6000.0).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1,
                "start_time": "18:00",
                "end_time": "20:00",
                "sport_type": "FUTBOL_5",
                "rate_ids": [r2, r1]
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let schedule = parse_body(res).await;
    let schedule_id = schedule["id"].as_str().unwrap().to_string();
    assert_eq!(schedule["start_time"].as_str().unwrap(), "18:00");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/schedules/{}", schedule_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let rates = body["rates"].as_array().unwrap();

    // Attachment order is preserved: Nocturno first.
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0]["name"].as_str().unwrap(), "Nocturno");
    assert_eq!(rates[1]["name"].as_str().unwrap(), "Diurno");
}

#[tokio::test]
async fn test_create_schedule_validations() {
    let app = TestApp::new().await;
    let cid = create_complex(&app).await;
    let rate = create_rate(&app, &cid, "Base", 5000.0).await;

    // Inverted window.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1, "start_time": "20:00", "end_time": "18:00",
                "sport_type": "FUTBOL_5", "rate_ids": [rate]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Bad time format.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1, "start_time": "6pm", "end_time": "20:00",
                "sport_type": "FUTBOL_5", "rate_ids": [rate]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Weekday out of range.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 9, "start_time": "18:00", "end_time": "20:00",
                "sport_type": "FUTBOL_5", "rate_ids": [rate]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown rate id.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1, "start_time": "18:00", "end_time": "20:00",
                "sport_type": "FUTBOL_5", "rate_ids": ["nope"]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_schedule_window_and_rates() {
    let app = TestApp::new().await;
    let cid = create_complex(&app).await;
    let r1 = create_rate(&app, &cid, "Diurno", 4000.0).await;
    let r2 = create_rate(&app, &cid, "Nocturno", 6000.0).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1, "start_time": "18:00", "end_time": "20:00",
                "sport_type": "FUTBOL_5", "rate_ids": [r1]
            }).to_string())).unwrap()
    ).await.unwrap();
    let schedule_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/schedules/{}", schedule_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "end_time": "22:00",
                "rate_ids": [r2]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["end_time"].as_str().unwrap(), "22:00");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/schedules/{}", schedule_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let rates = body["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["name"].as_str().unwrap(), "Nocturno");
}

#[tokio::test]
async fn test_delete_schedule() {
    let app = TestApp::new().await;
    let cid = create_complex(&app).await;
    let rate = create_rate(&app, &cid, "Base", 5000.0).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "day_of_week": 1, "start_time": "18:00", "end_time": "20:00",
                "sport_type": "FUTBOL_5", "rate_ids": [rate]
            }).to_string())).unwrap()
    ).await.unwrap();
    let schedule_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/schedules/{}", schedule_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/complexes/{}/schedules", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}
