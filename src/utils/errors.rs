//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del proxy
//! y su conversión a los sobres JSON que espera el frontend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Forma del sobre de error que devuelve cada recurso.
///
/// El frontend depende de la forma exacta de cada recurso, por eso no se unifican.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// `{ error, status, details, originalResponse }`
    Full,
    /// `{ error, status, details }`
    WithStatus,
    /// `{ error, details }`
    Simple,
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Falta un campo obligatorio o no tiene el formato esperado (400, sin llamada remota)
    #[error("Validation error: {0}")]
    Validation(String),

    /// El backend remoto respondió con un estado fuera de 2xx
    #[error("Upstream error ({status}): {summary}")]
    Upstream {
        summary: String,
        status: StatusCode,
        details: Value,
        original_response: String,
        shape: ErrorShape,
    },

    /// Fallo de red o cualquier excepción durante el manejo del request (500)
    #[error("{error}: {details}")]
    Transport { error: String, details: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(rename = "originalResponse", skip_serializing_if = "Option::is_none")]
    original_response: Option<String>,
}

impl ErrorResponse {
    fn message(error: String) -> Self {
        Self {
            error,
            status: None,
            details: None,
            original_response: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(msg) => {
                log::warn!("⚠️ Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::message(msg))
            }

            AppError::Upstream {
                summary,
                status,
                details,
                original_response,
                shape,
            } => {
                log::warn!("⚠️ Upstream responded {}: {}", status, summary);
                let body = match shape {
                    ErrorShape::Full => ErrorResponse {
                        error: summary,
                        status: Some(status.as_u16()),
                        details: Some(details),
                        original_response: Some(original_response),
                    },
                    ErrorShape::WithStatus => ErrorResponse {
                        error: summary,
                        status: Some(status.as_u16()),
                        details: Some(details),
                        original_response: None,
                    },
                    ErrorShape::Simple => ErrorResponse {
                        error: summary,
                        status: None,
                        details: Some(details),
                        original_response: None,
                    },
                };
                (status, body)
            }

            AppError::Transport { error, details } => {
                log::error!("❌ {}: {}", error, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error,
                        status: None,
                        details: Some(Value::String(details)),
                        original_response: None,
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                log::warn!("🔒 Unauthorized access: {}", msg);
                (StatusCode::UNAUTHORIZED, ErrorResponse::message(msg))
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: impl Into<String>) -> AppError {
    AppError::Validation(message.into())
}

/// Función helper para convertir una excepción en el sobre 500 de un recurso
pub fn transport_error(message: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Transport {
        error: message.to_string(),
        details: format!("{:#}", err),
    }
}
