use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, complex, court, schedule, rate, promotion, unavailable_day, reserve};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Complexes
        .route("/api/v1/complexes", post(complex::create_complex).get(complex::list_complexes))
        .route("/api/v1/complexes/{complex_id}", get(complex::get_complex).put(complex::update_complex).delete(complex::delete_complex))

        // Weekly grid
        .route("/api/v1/complexes/{complex_id}/schedule-days", get(complex::list_schedule_days))
        .route("/api/v1/complexes/{complex_id}/schedule-days/{day_of_week}", put(complex::set_schedule_day))

        // Courts
        .route("/api/v1/complexes/{complex_id}/courts", post(court::create_court).get(court::list_courts))
        .route("/api/v1/complexes/{complex_id}/courts/{court_id}", put(court::update_court).delete(court::delete_court))

        // Schedules
        .route("/api/v1/complexes/{complex_id}/schedules", post(schedule::create_schedule).get(schedule::list_schedules))
        .route("/api/v1/schedules/{schedule_id}", get(schedule::get_schedule).put(schedule::update_schedule).delete(schedule::delete_schedule))

        // Rates
        .route("/api/v1/complexes/{complex_id}/rates", post(rate::create_rate).get(rate::list_rates))
        .route("/api/v1/rates", post(rate::create_global_rate))
        .route("/api/v1/rates/{rate_id}", put(rate::update_rate).delete(rate::delete_rate))

        // Promotions
        .route("/api/v1/complexes/{complex_id}/promotions", post(promotion::create_promotion).get(promotion::list_promotions))
        .route("/api/v1/promotions/{promotion_id}", get(promotion::get_promotion).put(promotion::update_promotion).delete(promotion::delete_promotion))

        // Blocked dates
        .route("/api/v1/complexes/{complex_id}/unavailable-days", post(unavailable_day::create_unavailable_day).get(unavailable_day::list_unavailable_days))
        .route("/api/v1/unavailable-days", post(unavailable_day::create_global_unavailable_day))
        .route("/api/v1/unavailable-days/{day_id}", delete(unavailable_day::delete_unavailable_day))

        // Public booking flow
        .route("/api/v1/complexes/{complex_id}/dates", get(reserve::get_available_dates))
        .route("/api/v1/complexes/{complex_id}/pricing", get(reserve::quote_pricing))
        .route("/api/v1/complexes/{complex_id}/reserves", post(reserve::create_reserve).get(reserve::list_reserves))

        // Reserve management
        .route("/api/v1/reserves/{reserve_id}", get(reserve::get_reserve).put(reserve::update_reserve).delete(reserve::delete_reserve))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
