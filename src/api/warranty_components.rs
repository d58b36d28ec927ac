//! Handler del calculador de cobertura por componente
//!
//! No contacta el backend: la tabla es fija y se recalcula en cada request.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::proxy::query_params;
use crate::services::warranty_components::resolve_model;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppResult};

#[derive(Debug, Deserialize)]
pub struct ComponentsQuery {
    pub model: Option<String>,
}

pub fn create_warranty_components_router() -> Router<AppState> {
    Router::new().route("/", get(get_warranty_components))
}

/// Cobertura restante por componente para un modelo de vehículo
pub async fn get_warranty_components(
    State(state): State<AppState>,
    query: Result<Query<ComponentsQuery>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let query = query_params(query)?;
    let model = query
        .model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| validation_error("Missing required parameter: model"))?;

    let resolved = resolve_model(model);
    if !resolved.eq_ignore_ascii_case(model) {
        log::info!("🔧 Modelo '{}' desconocido, usando tabla {}", model, resolved);
    }

    let components = state.calculator.calculate_now(model);
    Ok(Json(json!({
        "success": true,
        "model": resolved,
        "warranty_start_date": state.calculator.start_date,
        "assumed_odometer_km": state.calculator.assumed_odometer_km,
        "data": components,
    })))
}
