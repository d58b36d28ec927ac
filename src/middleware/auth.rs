//! Middleware de autenticación
//!
//! Todavía no hay autenticación real. En modo desarrollador se inyecta un
//! administrador fijo en cada request; fuera de ese modo toda ruta protegida
//! responde 401 sin contactar el backend.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
}

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Usuario fijo del modo desarrollador
    pub fn developer() -> Self {
        Self {
            id: 1,
            username: "admin".to_string(),
            name: "Developer Admin".to_string(),
            email: "admin@localhost".to_string(),
            role: UserRole::Admin,
        }
    }
}

/// Middleware del modo desarrollador
pub async fn developer_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.config.developer_mode {
        return Err(AppError::Unauthorized(
            "Authentication is not configured".to_string(),
        ));
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser::developer());
    Ok(next.run(request).await)
}
