mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

// 2030-07-01 is a Monday.
const MONDAY: &str = "2030-07-01";
const TUESDAY: &str = "2030-07-02";

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

/// Complex with Monday active and one 18:00 - 20:00 window priced at
/// 5000 / 2000.
async fn setup_complex(app: &TestApp) -> String {
    let res = post_json(app, "/api/v1/complexes", json!({"name": "Bertaca", "address": "Calle 1"})).await;
    let cid = parse_body(res).await["id"].as_str().unwrap().to_string();

    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}/schedule-days/1", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": true}).to_string())).unwrap()
    ).await.unwrap();

    let res = post_json(app, &format!("/api/v1/complexes/{}/rates", cid),
        json!({"name": "Nocturno", "price": 5000.0, "reservation_amount": 2000.0})).await;
    let rate_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    post_json(app, &format!("/api/v1/complexes/{}/schedules", cid), json!({
        "day_of_week": 1,
        "start_time": "18:00",
        "end_time": "20:00",
        "sport_type": "FUTBOL_5",
        "rate_ids": [rate_id]
    })).await;

    cid
}

#[tokio::test]
async fn test_pricing_quote_for_contained_range() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=18:00%20-%2019:00", cid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let pricing = &body["pricing"];

    assert_eq!(pricing["price"].as_f64().unwrap(), 5000.0);
    assert_eq!(pricing["reservation_amount"].as_f64().unwrap(), 2000.0);
    assert_eq!(pricing["rate_name"].as_str().unwrap(), "Nocturno");
    assert_eq!(pricing["schedule"].as_str().unwrap(), "18:00 - 20:00");
    assert_eq!(pricing["day_of_week"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_pricing_quote_null_outside_window() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=19:00%20-%2021:00", cid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert!(body["pricing"].is_null(), "Range overflowing the window must not price");
}

#[tokio::test]
async fn test_pricing_quote_null_on_inactive_day() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    // Tuesday was never activated.
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=18:00%20-%2019:00", cid, TUESDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert!(body["pricing"].is_null());
}

#[tokio::test]
async fn test_pricing_quote_null_on_blocked_date() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    post_json(&app, &format!("/api/v1/complexes/{}/unavailable-days", cid),
        json!({"date": MONDAY, "reason": "mantenimiento"})).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=18:00%20-%2019:00", cid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert!(body["pricing"].is_null(), "Blocked date must not price even when the window matches");
}

#[tokio::test]
async fn test_pricing_quote_first_rate_wins() {
    let app = TestApp::new().await;
    let res = post_json(&app, "/api/v1/complexes", json!({"name": "Seven", "address": "Calle 2"})).await;
    let cid = parse_body(res).await["id"].as_str().unwrap().to_string();

    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}/schedule-days/1", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": true}).to_string())).unwrap()
    ).await.unwrap();

    let res = post_json(&app, &format!("/api/v1/complexes/{}/rates", cid),
        json!({"name": "Primera", "price": 4000.0, "reservation_amount": 1000.0})).await;
    let r1 = parse_body(res).await["id"].as_str().unwrap().to_string();
    let res = post_json(&app, &format!("/api/v1/complexes/{}/rates", cid),
        json!({"name": "Segunda", "price": 9000.0, "reservation_amount": 5000.0})).await;
    let r2 = parse_body(res).await["id"].as_str().unwrap().to_string();

    post_json(&app, &format!("/api/v1/complexes/{}/schedules", cid), json!({
        "day_of_week": 1, "start_time": "18:00", "end_time": "20:00",
        "sport_type": "FUTBOL_5", "rate_ids": [r1, r2]
    })).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=18:00%20-%2019:00", cid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["pricing"]["rate_name"].as_str().unwrap(), "Primera");
    assert_eq!(body["pricing"]["price"].as_f64().unwrap(), 4000.0);
}

#[tokio::test]
async fn test_available_dates_range() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    // Block the first Monday; the next one stays open.
    post_json(&app, &format!("/api/v1/complexes/{}/unavailable-days", cid),
        json!({"date": MONDAY})).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/dates?start=2030-07-01&end=2030-07-10", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let dates = parse_body(res).await;
    let dates = dates.as_array().unwrap();

    assert!(!dates.contains(&json!(MONDAY)), "Blocked Monday must be excluded");
    assert!(dates.contains(&json!("2030-07-08")), "Following Monday should be open");
    assert!(!dates.contains(&json!(TUESDAY)), "Inactive weekday must be excluded");
}

#[tokio::test]
async fn test_global_block_applies_to_every_complex() {
    let app = TestApp::new().await;
    let cid = setup_complex(&app).await;

    post_json(&app, "/api/v1/unavailable-days", json!({"date": MONDAY, "reason": "feriado"})).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/complexes/{}/pricing?date={}&range=18:00%20-%2019:00", cid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert!(body["pricing"].is_null());
}
