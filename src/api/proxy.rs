//! Plumbing común de los handlers proxy
//!
//! Normaliza las respuestas del backend: éxito sin envolver o envuelto en
//! `{ success, data }` según el recurso, y sobre de error con el mismo estado
//! que devolvió el backend.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::clients::UpstreamResponse;
use crate::utils::errors::{transport_error, validation_error, AppError, AppResult, ErrorShape};

/// Parsear el body entrante. Un JSON mal formado es un 500 con `details`.
pub fn parse_json_body(body: &Bytes, error_message: &str) -> AppResult<Value> {
    serde_json::from_slice(body).map_err(|e| transport_error(error_message, e))
}

/// Query tipado; si no deserializa es un 400 con el sobre `{ error }`
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| validation_error(rejection.body_text()))
}

/// El backend a veces responde 204; nosotros siempre devolvemos un body JSON
fn success_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::NO_CONTENT {
        StatusCode::OK
    } else {
        status
    }
}

/// Sobre de error para una respuesta fuera de 2xx
pub fn upstream_error(response: UpstreamResponse, summary: &str, shape: ErrorShape) -> AppError {
    AppError::Upstream {
        summary: summary.to_string(),
        status: response.status,
        details: response.payload(),
        original_response: response.body,
        shape,
    }
}

/// Reenviar el payload del backend tal cual (customers, vehicles, service-items...)
pub fn relay(response: UpstreamResponse, summary: &str, shape: ErrorShape) -> AppResult<Response> {
    if !response.is_success() {
        return Err(upstream_error(response, summary, shape));
    }
    let status = success_status(response.status);
    Ok((status, Json(response.payload())).into_response())
}

/// Reenviar el payload envuelto en `{ success: true, data }` (warranties, warranty-parts)
pub fn relay_wrapped(
    response: UpstreamResponse,
    summary: &str,
    shape: ErrorShape,
) -> AppResult<Response> {
    if !response.is_success() {
        return Err(upstream_error(response, summary, shape));
    }
    let status = success_status(response.status);
    Ok((status, Json(wrap_success(response.payload()))).into_response())
}

pub fn wrap_success(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// Parámetro `id` para el query del backend
pub fn id_query(id: i64) -> Vec<(String, String)> {
    vec![("id".to_string(), id.to_string())]
}
