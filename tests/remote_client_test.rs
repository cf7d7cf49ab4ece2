// ABOUTME: Integration tests for the remote compute client against an in-process HTTP server
// ABOUTME: Covers request schema, PSI/BAR normalization, clamping, and generic failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tire Pressure Studio

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::reference_road_setup;
use serde_json::{json, Value};
use tire_pressure_studio::errors::{ErrorCode, REMOTE_FAILURE_MESSAGE};
use tire_pressure_studio::external::{RemoteEstimator, RemoteEstimatorConfig};
use tire_pressure_studio::intelligence::PressureSource;
use tire_pressure_studio::models::PressureUnit;
use tokio::net::TcpListener;

/// What the fake compute service answers with
#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode),
    Text(&'static str),
}

#[derive(Clone)]
struct FakeService {
    reply: Reply,
    health: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn compute(State(service): State<FakeService>, Json(body): Json<Value>) -> impl IntoResponse {
    service.received.lock().unwrap().push(body);
    match service.reply {
        Reply::Json(value) => (StatusCode::OK, Json(value)).into_response(),
        Reply::Status(status) => (status, "compute failed").into_response(),
        Reply::Text(text) => (StatusCode::OK, text).into_response(),
    }
}

async fn health(State(service): State<FakeService>) -> impl IntoResponse {
    Json(service.health)
}

/// Start the fake service on an ephemeral port and return a client for it
async fn spawn_service(reply: Reply) -> (RemoteEstimator, Arc<Mutex<Vec<Value>>>) {
    spawn_service_with_health(reply, json!({"status": "healthy"})).await
}

async fn spawn_service_with_health(
    reply: Reply,
    health_body: Value,
) -> (RemoteEstimator, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let service = FakeService {
        reply,
        health: health_body,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/", get(health))
        .route("/compute", post(compute))
        .with_state(service);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = RemoteEstimator::new(RemoteEstimatorConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    })
    .unwrap();
    (client, received)
}

#[tokio::test]
async fn test_psi_reply_becomes_estimate() {
    let (client, _) = spawn_service(Reply::Json(
        json!({"front_wheel": 58.0, "rear_wheel": 61.5, "unit": "PSI"}),
    ))
    .await;

    assert_eq!(client.name(), "remote");
    let estimate = client.estimate(&reference_road_setup()).await.unwrap().unwrap();
    assert!((estimate.front_psi() - 58.0).abs() < f64::EPSILON);
    assert!((estimate.rear_psi() - 61.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_bar_reply_is_normalized_to_psi() {
    let (client, _) = spawn_service(Reply::Json(
        json!({"front_wheel": 4.0, "rear_wheel": 4.2, "unit": "BAR"}),
    ))
    .await;

    let reading = client.compute(&reference_road_setup()).await.unwrap();
    assert_eq!(reading.unit, PressureUnit::Bar);

    let estimate = client.estimate(&reference_road_setup()).await.unwrap().unwrap();
    assert!((estimate.front_psi() - 4.0 * 14.5038).abs() < 1e-9);
    assert!((estimate.rear_psi() - 4.2 * 14.5038).abs() < 1e-9);
}

#[tokio::test]
async fn test_out_of_range_reply_is_clamped() {
    let (client, _) = spawn_service(Reply::Json(
        json!({"front_wheel": 120.0, "rear_wheel": 3.0, "unit": "PSI"}),
    ))
    .await;

    let estimate = client.estimate(&reference_road_setup()).await.unwrap().unwrap();
    assert!((estimate.front_psi() - 75.0).abs() < f64::EPSILON);
    assert!((estimate.rear_psi() - 12.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_request_body_follows_service_schema() {
    let (client, received) = spawn_service(Reply::Json(
        json!({"front_wheel": 55.0, "rear_wheel": 57.0, "unit": "PSI"}),
    ))
    .await;

    client.estimate(&reference_road_setup()).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["bike"]["name"], "Custom setup");
    assert_eq!(body["bike"]["discipline"], "ROAD");
    assert_eq!(body["bike"]["front_tire"]["width"], 28.0);
    assert_eq!(body["bike"]["front_tire"]["unit"], "MM");
    assert_eq!(body["bike"]["rear_tire"]["width"], 30.0);
    assert_eq!(body["bike"]["rear_wheel"]["rim_type"], "HOOKLESS");
    assert_eq!(body["bike"]["rear_wheel"]["diameter"], "700C");
    assert_eq!(body["bike"]["weight"], json!({"value": 8.5, "unit": "kg"}));
    assert_eq!(body["rider_weight"], json!({"value": 72.0, "unit": "kg"}));
    assert_eq!(body["surface"], "DRY");
}

#[tokio::test]
async fn test_error_status_is_generic_retryable_failure() {
    let (client, _) = spawn_service(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)).await;

    let error = client.estimate(&reference_road_setup()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.message, REMOTE_FAILURE_MESSAGE);
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_undecodable_body_is_generic_failure() {
    let (client, _) = spawn_service(Reply::Text("<html>maintenance</html>")).await;

    let error = client.estimate(&reference_road_setup()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.message, REMOTE_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_wrong_unit_is_generic_failure() {
    let (client, _) = spawn_service(Reply::Json(
        json!({"front_wheel": 400.0, "rear_wheel": 410.0, "unit": "KPA"}),
    ))
    .await;

    let error = client.estimate(&reference_road_setup()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_unreachable_service_is_generic_failure() {
    // Reserve a port, then free it so nothing listens there
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RemoteEstimator::new(RemoteEstimatorConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
        connect_timeout_secs: 1,
    })
    .unwrap();

    let error = client.estimate(&reference_road_setup()).await.unwrap_err();
    assert_eq!(error.message, REMOTE_FAILURE_MESSAGE);
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_incomplete_setup_is_not_submitted() {
    let (client, received) = spawn_service(Reply::Json(
        json!({"front_wheel": 55.0, "rear_wheel": 57.0, "unit": "PSI"}),
    ))
    .await;

    let mut setup = reference_road_setup();
    setup.front.tire.width_mm = 0.0;

    assert_eq!(client.estimate(&setup).await.unwrap(), None);
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let (client, _) = spawn_service(Reply::Status(StatusCode::OK)).await;
    assert!(client.health_check().await.is_ok());

    let (client, _) =
        spawn_service_with_health(Reply::Status(StatusCode::OK), json!({"status": "degraded"}))
            .await;
    let error = client.health_check().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
