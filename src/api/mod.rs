//! API endpoints
//! 
//! Este módulo contiene los endpoints proxy hacia el backend de postventa
//! y el router principal de la aplicación.

pub mod auth;
pub mod customers;
pub mod proxy;
pub mod service_items;
pub mod stock_movements;
pub mod vehicles;
pub mod warranties;
pub mod warranty_components;
pub mod warranty_parts;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, developer_auth_middleware};
use crate::state::AppState;

/// Crear el router de la API (`/api/...`), protegido por el middleware de autenticación
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::create_auth_router())
        .nest("/api/customers", customers::create_customers_router())
        .nest("/api/vehicles", vehicles::create_vehicles_router())
        .nest("/api/warranties", warranties::create_warranties_router())
        .nest("/api/service-items", service_items::create_service_items_router())
        .nest("/api/warranty-parts", warranty_parts::create_warranty_parts_router())
        .nest("/api/stock-movements", stock_movements::create_stock_movements_router())
        .nest(
            "/api/warranty-components",
            warranty_components::create_warranty_components_router(),
        )
        .route_layer(from_fn_with_state(state, developer_auth_middleware))
}

/// Router completo de la aplicación con estado, CORS y trazas
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(create_api_router(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check (sin autenticación)
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "aftersales-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
