//! Handlers de Customers
//!
//! Proxy CRUD hacia `/api/customers`. El éxito devuelve el payload del backend
//! sin envolver; el `id` de PUT/DELETE viaja en el query.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use std::collections::HashMap;

use crate::api::proxy::{id_query, parse_json_body, relay};
use crate::models::customer::CustomerPayload;
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};
use crate::utils::validation::{parse_id, validate_payload};

const CUSTOMERS_PATH: &str = "/api/customers";
const SHAPE: ErrorShape = ErrorShape::Full;

pub fn create_customers_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_customers)
            .post(create_customer)
            .put(update_customer)
            .delete(delete_customer),
    )
}

/// Listar clientes (query reenviado tal cual)
pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch customers";

    let response = state
        .backend
        .get(CUSTOMERS_PATH, &params)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Crear un cliente
pub async fn create_customer(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    const ERROR: &str = "Failed to create customer";

    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<CustomerPayload>(&payload, "customer")?;

    log::info!("👤 Creando cliente");
    let response = state
        .backend
        .post(CUSTOMERS_PATH, &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Actualizar un cliente (`?id=`)
pub async fn update_customer(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to update customer";

    let id = parse_id(params.get("id").map(String::as_str), "id")?;
    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<CustomerPayload>(&payload, "customer")?;

    log::info!("👤 Actualizando cliente {}", id);
    let response = state
        .backend
        .put(CUSTOMERS_PATH, &id_query(id), &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Eliminar un cliente (`?id=`)
pub async fn delete_customer(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to delete customer";

    let id = parse_id(params.get("id").map(String::as_str), "id")?;

    log::info!("🗑️ Eliminando cliente {}", id);
    let response = state
        .backend
        .delete(CUSTOMERS_PATH, &id_query(id))
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}
