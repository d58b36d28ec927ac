mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aftersales_gateway::{build_router, AppState, EnvironmentConfig};
use common::*;

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(unreachable_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "aftersales-gateway");
}

#[tokio::test]
async fn test_developer_mode_injects_admin() {
    let (status, body) = get(unreachable_app(), "/api/auth/me").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["username"], "admin");
}

#[tokio::test]
async fn test_without_developer_mode_api_is_rejected_before_upstream() {
    let server = MockServer::start().await;
    let mut config = EnvironmentConfig::for_upstream(&server.uri());
    config.developer_mode = false;
    let app = build_router(AppState::new(config).unwrap());

    let (status, body) = get(app.clone(), "/api/customers").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication is not configured");
    assert_eq!(request_count(&server).await, 0);

    let (status, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_customers_forwards_query_and_returns_bare_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("search", "Jane"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Jane Doe", "phone": "012345678" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/customers?search=Jane").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Jane Doe", "phone": "012345678" }]));
}

#[tokio::test]
async fn test_create_customer_returns_upstream_body_unmodified() {
    let server = MockServer::start().await;
    let request = json!({ "name": "Jane Doe", "email": "jane@example.com", "phone": "012345678" });
    let created = json!({ "id": 42, "name": "Jane Doe", "email": "jane@example.com", "created_at": "2024-05-01 10:00:00" });

    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .and(header("content-type", "application/json"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), Method::POST, "/api/customers", Some(request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_update_customer_propagates_upstream_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/customers"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Email already in use"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        Method::PUT,
        "/api/customers?id=7",
        Some(json!({ "name": "Jane", "email": "taken@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "error": "Failed to update customer",
            "status": 422,
            "details": { "message": "Email already in use" },
            "originalResponse": "Email already in use"
        })
    );
}

#[tokio::test]
async fn test_upstream_invalid_json_on_success_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers"))
        .and(query_param("id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Deleted"))
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), Method::DELETE, "/api/customers?id=3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Deleted" }));
}

#[tokio::test]
async fn test_missing_or_malformed_ids_never_reach_upstream() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let cases: Vec<(Method, &str, Option<serde_json::Value>)> = vec![
        (Method::PUT, "/api/customers", Some(json!({ "name": "Jane" }))),
        (Method::DELETE, "/api/customers?id=abc", None),
        (Method::GET, "/api/vehicles/abc", None),
        (Method::PUT, "/api/vehicles/1.5", Some(json!({ "plate": "2A-1234" }))),
        (Method::DELETE, "/api/warranties/x", None),
        (Method::GET, "/api/warranties/x", None),
        (Method::GET, "/api/service-items", None),
        (Method::GET, "/api/service-items?service_id=", None),
        (Method::DELETE, "/api/service-items", None),
        (Method::GET, "/api/warranty-parts", None),
        (Method::GET, "/api/warranty-parts?vehicle_model_id=2&vehicle_id=abc", None),
        (Method::DELETE, "/api/warranty-parts?id=", None),
        (Method::GET, "/api/warranty-components", None),
    ];

    for (verb, uri, body) in cases {
        let (status, response) = send(app_for(&server), verb.clone(), uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", verb, uri);
        assert!(response["error"].is_string(), "{} {}", verb, uri);
    }

    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected_before_upstream() {
    let server = MockServer::start().await;

    let cases = vec![
        ("/api/customers", json!({ "email": "nobody@example.com" })),
        ("/api/customers", json!({ "name": "   " })),
        ("/api/vehicles", json!({ "model": "SOBEN" })),
        ("/api/vehicles", json!({ "plate": "2A-1234", "year": 1800 })),
        ("/api/warranties", json!({ "vehicle_id": "abc" })),
        ("/api/service-items", json!({ "description": "Oil change" })),
        ("/api/warranty-parts", json!({ "vehicle_model_id": null })),
    ];

    for (uri, body) in cases {
        let (status, _) = send(app_for(&server), Method::POST, uri, Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", uri, body);
    }

    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_malformed_inbound_json_is_a_500_with_details() {
    let server = MockServer::start().await;

    let (status, body) = send_raw(
        app_for(&server),
        Method::POST,
        "/api/customers",
        Some("{\"name\": \"Jane\""),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create customer");
    assert!(!body["details"].as_str().unwrap().is_empty());
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_transport_failures_are_500_for_non_warranty_resources() {
    let cases: Vec<(Method, &str, Option<serde_json::Value>)> = vec![
        (Method::GET, "/api/customers", None),
        (Method::POST, "/api/customers", Some(json!({ "name": "Jane" }))),
        (Method::GET, "/api/vehicles", None),
        (Method::GET, "/api/vehicles/4", None),
        (Method::DELETE, "/api/vehicles/4", None),
        (Method::GET, "/api/service-items?service_id=9", None),
        (Method::PUT, "/api/service-items?id=2", Some(json!({ "quantity": 2 }))),
        (Method::GET, "/api/warranty-parts?vehicle_model_id=1", None),
        (Method::GET, "/api/stock-movements", None),
        (Method::GET, "/api/stock-movements/summary", None),
    ];

    for (verb, uri, body) in cases {
        let (status, response) = send(unreachable_app(), verb.clone(), uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", verb, uri);
        assert!(response["error"].is_string(), "{} {}", verb, uri);
        let details = response["details"].as_str().unwrap_or_default();
        assert!(!details.is_empty(), "{} {}", verb, uri);
    }
}

#[tokio::test]
async fn test_vehicle_crud_uses_path_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "plate": "2A-1234", "vin": "LSV123", "model": "KAIN", "year": 2024
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/vehicles/12"))
        .and(body_json(json!({ "current_odometer": 31000 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 12, "current_odometer": 31000 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/vehicles/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/vehicles/12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plate"], "2A-1234");
    assert!(body.get("success").is_none());

    let (status, body) = send(
        app_for(&server),
        Method::PUT,
        "/api/vehicles/12",
        Some(json!({ "current_odometer": 31000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_odometer"], 31000);

    let (status, body) = send(app_for(&server), Method::DELETE, "/api/vehicles/12", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "" }));
}

#[tokio::test]
async fn test_vehicle_not_found_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Vehicle not found" })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/vehicles/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["details"]["error"], "Vehicle not found");
    assert_eq!(body["originalResponse"], r#"{"error":"Vehicle not found"}"#);
}

#[tokio::test]
async fn test_service_items_use_simple_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service-items"))
        .and(query_param("service_id", "5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Fatal error"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/service-items?service_id=5").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch service items", "details": { "message": "Fatal error" } })
    );
}

#[tokio::test]
async fn test_create_service_item_forwards_body_verbatim() {
    let server = MockServer::start().await;
    let item = json!({ "service_id": "5", "description": "Oil filter", "quantity": 1, "price": 12.5 });

    Mock::given(method("POST"))
        .and(path("/api/service-items"))
        .and(body_json(&item))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 88 })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), Method::POST, "/api/service-items", Some(item)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 88 }));
}

#[tokio::test]
async fn test_stock_movement_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stock-movements"))
        .and(query_param("item_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "item_id": 3, "movement_type": "in", "quantity": "20", "reference_type": "purchase" },
            { "id": 2, "item_id": 3, "movement_type": "out", "quantity": 6, "reference_type": "service" },
            { "id": 3, "item_id": 3, "movement_type": "adjustment", "quantity": -1, "reference_type": "adjustment" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/stock-movements/summary?item_id=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_in"], 20.0);
    assert_eq!(body["total_out"], 6.0);
    assert_eq!(body["total_adjustment"], -1.0);
    assert_eq!(body["net"], 13.0);
    assert_eq!(body["movement_count"], 3);
}

#[tokio::test]
async fn test_malformed_query_strings_use_the_validation_envelope() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    for uri in [
        "/api/warranties?status=active&status=expired",
        "/api/warranty-parts?vehicle_model_id=1&vehicle_model_id=2",
        "/api/warranty-components?model=KAIN&model=SOBEN",
    ] {
        let (status, body) = get(app_for(&server), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(
            body["error"].as_str().unwrap_or_default().contains("duplicate field"),
            "{}: {}",
            uri,
            body
        );
        assert!(body.get("data").is_none(), "{}", uri);
    }

    assert_eq!(request_count(&server).await, 0);
}
