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

async fn create_complex(app: &TestApp, name: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/complexes")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": name, "address": "Av. Siempre Viva 123"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_complex_seeds_seven_inactive_days() {
    let app = TestApp::new().await;
    let cid = create_complex(&app, "Bertaca").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/complexes/{}/schedule-days", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let days = parse_body(res).await;
    let days = days.as_array().unwrap();

    assert_eq!(days.len(), 7);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day["day_of_week"].as_i64().unwrap(), i as i64);
        assert!(!day["is_active"].as_bool().unwrap(), "Seeded days must start inactive");
    }
}

#[tokio::test]
async fn test_toggle_schedule_day() {
    let app = TestApp::new().await;
    let cid = create_complex(&app, "Seven").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}/schedule-days/1", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": true}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let day = parse_body(res).await;
    assert_eq!(day["day_of_week"].as_i64().unwrap(), 1);
    assert!(day["is_active"].as_bool().unwrap());

    // Out-of-range weekday is rejected before hitting the database.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}/schedule-days/7", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"is_active": true}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_get_complex() {
    let app = TestApp::new().await;
    let cid = create_complex(&app, "Bertaca").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"phone": "+54 9 11 5555-5555", "is_active": false}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/complexes/{}", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let complex = parse_body(res).await;
    assert_eq!(complex["phone"].as_str().unwrap(), "+54 9 11 5555-5555");
    assert!(!complex["is_active"].as_bool().unwrap());
}

#[tokio::test]
async fn test_create_complex_rejects_empty_name() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/complexes")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "  ", "address": "x"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_court_crud() {
    let app = TestApp::new().await;
    let cid = create_complex(&app, "Bertaca").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/complexes/{}/courts", cid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Cancha 1", "sport_type": "FUTBOL_5"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let court_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/complexes/{}/courts/{}", cid, court_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Cancha Principal"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/complexes/{}/courts", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let courts = parse_body(res).await;
    assert_eq!(courts.as_array().unwrap().len(), 1);
    assert_eq!(courts[0]["name"].as_str().unwrap(), "Cancha Principal");

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/complexes/{}/courts/{}", cid, court_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/complexes/{}/courts", cid))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}
