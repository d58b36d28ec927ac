//! Endpoints de autenticación
//!
//! Solo expone el usuario actual que inyecta el middleware.

use axum::{routing::get, Extension, Json, Router};
use serde_json::{json, Value};

use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/me", get(current_user))
}

/// Usuario actual
pub async fn current_user(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": user,
    }))
}
