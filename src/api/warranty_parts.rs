//! Handlers de Warranty Parts
//!
//! El GET combina componentes base, garantía del modelo y vehículo
//! (ver `services::warranty_parts_service`).

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;

use crate::api::proxy::{id_query, parse_json_body, query_params, relay_wrapped, wrap_success};
use crate::models::warranty_part::{WarrantyPartPayload, WarrantyPartsQuery};
use crate::services::warranty_parts_service::{WarrantyPartsService, WARRANTY_PARTS_PATH};
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};
use crate::utils::validation::{parse_id, validate_payload};

const SHAPE: ErrorShape = ErrorShape::WithStatus;

pub fn create_warranty_parts_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_warranty_parts)
            .post(create_warranty_part)
            .delete(delete_warranty_part),
    )
}

/// Componentes de garantía de un modelo, con overrides del modelo aplicados
pub async fn list_warranty_parts(
    State(state): State<AppState>,
    query: Result<Query<WarrantyPartsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let query = query_params(query)?;
    let vehicle_model_id = parse_id(query.vehicle_model_id.as_deref(), "vehicle_model_id")?;
    let vehicle_id = match query.vehicle_id.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(raw) => Some(parse_id(Some(raw), "vehicle_id")?),
        None => None,
    };

    let merged = WarrantyPartsService::new(&state.backend)
        .fetch_merged(vehicle_model_id, vehicle_id)
        .await?;

    let data = serde_json::to_value(&merged)
        .map_err(|e| transport_error("Failed to fetch warranty parts", e))?;
    Ok(Json(wrap_success(data)).into_response())
}

pub async fn create_warranty_part(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to create warranty part";

    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<WarrantyPartPayload>(&payload, "warranty part")?;

    let response = state
        .backend
        .post(WARRANTY_PARTS_PATH, &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay_wrapped(response, ERROR, SHAPE)
}

pub async fn delete_warranty_part(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to delete warranty part";

    let id = parse_id(params.get("id").map(String::as_str), "id")?;

    let response = state
        .backend
        .delete(WARRANTY_PARTS_PATH, &id_query(id))
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay_wrapped(response, ERROR, SHAPE)
}
