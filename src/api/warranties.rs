//! Handlers de Warranties
//!
//! Proxy CRUD hacia `/api/warranties`. El éxito se envuelve en
//! `{ success: true, data }`.
//!
//! Las lecturas (GET) que fallan por transporte devuelven datos de respaldo
//! marcados con `debug_fallback_data: true`. Las escrituras nunca: un fallo
//! en POST/PUT/DELETE siempre es un sobre de error.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::proxy::{parse_json_body, query_params, relay_wrapped, wrap_success};
use crate::models::warranty::{WarrantyFilters, WarrantyPayload};
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};
use crate::utils::validation::{parse_id, validate_payload};

const WARRANTIES_PATH: &str = "/api/warranties";
const SHAPE: ErrorShape = ErrorShape::WithStatus;

pub fn create_warranties_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warranties).post(create_warranty))
        .route(
            "/:id",
            get(get_warranty).put(update_warranty).delete(delete_warranty),
        )
}

fn warranty_path(id: i64) -> String {
    format!("{}/{}", WARRANTIES_PATH, id)
}

/// Listar garantías filtrando por `status` y `search`
pub async fn list_warranties(
    State(state): State<AppState>,
    filters: Result<Query<WarrantyFilters>, QueryRejection>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch warranties";

    let filters = query_params(filters)?;

    match state.backend.get(WARRANTIES_PATH, &filters.to_query()).await {
        Ok(response) => relay_wrapped(response, ERROR, SHAPE),
        Err(e) => {
            log::warn!("⚠️ Backend no disponible, usando garantías de respaldo: {:#}", e);
            Ok(Json(wrap_success(state.fallback.warranty_list())).into_response())
        }
    }
}

/// Obtener una garantía por ID
pub async fn get_warranty(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch warranty";

    let id = parse_id(Some(&id), "id")?;
    match state.backend.get(&warranty_path(id), &[]).await {
        Ok(response) => relay_wrapped(response, ERROR, SHAPE),
        Err(e) => {
            log::warn!(
                "⚠️ Backend no disponible, usando garantía {} de respaldo: {:#}",
                id,
                e
            );
            Ok(Json(wrap_success(state.fallback.warranty_detail(id))).into_response())
        }
    }
}

/// Crear una garantía
pub async fn create_warranty(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    const ERROR: &str = "Failed to create warranty";

    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<WarrantyPayload>(&payload, "warranty")?;

    log::info!("🛡️ Creando garantía");
    let response = state
        .backend
        .post(WARRANTIES_PATH, &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay_wrapped(response, ERROR, SHAPE)
}

/// Actualizar una garantía
pub async fn update_warranty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to update warranty";

    let id = parse_id(Some(&id), "id")?;
    let payload = parse_json_body(&body, ERROR)?;

    log::info!("🛡️ Actualizando garantía {}", id);
    let response = state
        .backend
        .put(&warranty_path(id), &[], &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay_wrapped(response, ERROR, SHAPE)
}

/// Eliminar una garantía
pub async fn delete_warranty(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to delete warranty";

    let id = parse_id(Some(&id), "id")?;

    log::info!("🗑️ Eliminando garantía {}", id);
    let response = state
        .backend
        .delete(&warranty_path(id), &[])
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay_wrapped(response, ERROR, SHAPE)
}
