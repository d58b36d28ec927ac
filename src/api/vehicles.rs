//! Handlers de Vehicles
//!
//! Proxy CRUD hacia `/api/vehicles`. El `id` viaja en el path y el éxito
//! devuelve el payload del backend sin envolver.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::api::proxy::{parse_json_body, relay};
use crate::models::vehicle::VehiclePayload;
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};
use crate::utils::validation::{parse_id, validate_payload};

const VEHICLES_PATH: &str = "/api/vehicles";
const SHAPE: ErrorShape = ErrorShape::Full;

pub fn create_vehicles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

fn vehicle_path(id: i64) -> String {
    format!("{}/{}", VEHICLES_PATH, id)
}

/// Listar vehículos (query reenviado tal cual)
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch vehicles";

    let response = state
        .backend
        .get(VEHICLES_PATH, &params)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Obtener un vehículo por ID
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch vehicle";

    let id = parse_id(Some(&id), "id")?;
    let response = state
        .backend
        .get(&vehicle_path(id), &[])
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Crear un vehículo
pub async fn create_vehicle(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    const ERROR: &str = "Failed to create vehicle";

    let payload = parse_json_body(&body, ERROR)?;
    validate_payload::<VehiclePayload>(&payload, "vehicle")?;

    log::info!("🚗 Creando vehículo");
    let response = state
        .backend
        .post(VEHICLES_PATH, &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Actualizar un vehículo existente.
///
/// Los updates parciales son válidos: aquí no se exige la matrícula.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to update vehicle";

    let id = parse_id(Some(&id), "id")?;
    let payload = parse_json_body(&body, ERROR)?;

    log::info!("🚗 Actualizando vehículo {}", id);
    let response = state
        .backend
        .put(&vehicle_path(id), &[], &payload)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Eliminar un vehículo
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to delete vehicle";

    let id = parse_id(Some(&id), "id")?;

    log::info!("🗑️ Eliminando vehículo {}", id);
    let response = state
        .backend
        .delete(&vehicle_path(id), &[])
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}
