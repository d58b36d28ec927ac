//! Handlers de Stock Movements
//!
//! Lista de solo lectura y sus totales agregados.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::proxy::{relay, upstream_error};
use crate::services::stock_summary::StockSummary;
use crate::state::AppState;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};

const STOCK_MOVEMENTS_PATH: &str = "/api/stock-movements";
const SHAPE: ErrorShape = ErrorShape::Simple;

pub fn create_stock_movements_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stock_movements))
        .route("/summary", get(stock_movements_summary))
}

pub async fn list_stock_movements(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to fetch stock movements";

    let response = state
        .backend
        .get(STOCK_MOVEMENTS_PATH, &params)
        .await
        .map_err(|e| transport_error(ERROR, e))?;
    relay(response, ERROR, SHAPE)
}

/// Totales por tipo de movimiento sobre la misma lista filtrada
pub async fn stock_movements_summary(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    const ERROR: &str = "Failed to summarize stock movements";

    let response = state
        .backend
        .get(STOCK_MOVEMENTS_PATH, &params)
        .await
        .map_err(|e| transport_error(ERROR, e))?;

    if !response.is_success() {
        return Err(upstream_error(response, ERROR, SHAPE));
    }

    let summary = StockSummary::from_payload(&response.payload());
    log::info!(
        "📦 Resumen de stock: {} movimientos, neto {}",
        summary.movement_count,
        summary.net
    );
    Ok(Json(summary).into_response())
}
