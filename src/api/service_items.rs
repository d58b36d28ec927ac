//! Handlers de Service Items
//!
//! Proxy CRUD hacia `/api/service-items`. Sobre de error reducido
//! `{ error, details }`.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use std::collections::HashMap;

use crate::api::proxy::{id_query, parse_json_body, relay};
use crate::models::service_item::ServiceItemPayload;
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};
use crate::utils::validation::{parse_id, validate_payload};

const SERVICE_ITEMS_PATH: &str = "/api/service-items";
const SHAPE: ErrorShape = ErrorShape::Simple;

pub fn create_service_items_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_service_items)
            .post(create_service_item)
            .put(update_service_item)
            .delete(delete_service_item),
    )
}

/// Líneas de un servicio (`?service_id=` obligatorio)
pub async fn list_service_items(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch service items";

    let service_id = parse_id(params.get("service_id").map(String::as_str), "service_id")?;
    let query = vec![("service_id".to_string(), service_id.to_string())];

    let response = state
        .backend
        .get(SERVICE_ITEMS_PATH, &query)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

pub async fn create_service_item(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to create service item";

    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<ServiceItemPayload>(&payload, "service item")?;

    let response = state
        .backend
        .post(SERVICE_ITEMS_PATH, &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

pub async fn update_service_item(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to update service item";

    let id = parse_id(params.get("id").map(String::as_str), "id")?;
    let payload = parse_json_body(&body, ERROR)?;

    let response = state
        .backend
        .put(SERVICE_ITEMS_PATH, &id_query(id), &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

pub async fn delete_service_item(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to delete service item";

    let id = parse_id(params.get("id").map(String::as_str), "id")?;

    let response = state
        .backend
        .delete(SERVICE_ITEMS_PATH, &id_query(id))
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}
