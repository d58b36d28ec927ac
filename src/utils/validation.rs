//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar la entrada antes de
//! contactar el backend remoto. Todo lo que falla aquí es un 400.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::utils::errors::{validation_error, AppResult};

/// Validar que un identificador esté presente y sea un entero
pub fn parse_id(value: Option<&str>, field: &str) -> AppResult<i64> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| validation_error(format!("Missing required parameter: {}", field)))?;

    raw.parse::<i64>()
        .map_err(|_| validation_error(format!("Invalid {}: '{}' is not an integer", field, raw)))
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_empty"));
    }
    Ok(())
}

/// Validar que un valor JSON sea un entero o un string numérico entero
pub fn validate_integer_like(value: &Value) -> Result<(), ValidationError> {
    let ok = match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("integer"))
    }
}

/// Comprobar un body contra su DTO sin modificarlo.
///
/// El body se reenvía tal cual; el DTO solo se usa para la validación.
pub fn validate_payload<T>(body: &Value, resource: &str) -> AppResult<()>
where
    T: DeserializeOwned + Validate,
{
    let dto: T = serde_json::from_value(body.clone())
        .map_err(|e| validation_error(format!("Invalid {} payload: {}", resource, e)))?;
    dto.validate()
        .map_err(|e| validation_error(format!("Invalid {} payload: {}", resource, e)))
}
