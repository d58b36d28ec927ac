//! Modelo de WarrantyPart
//!
//! Componentes de garantía por modelo de vehículo, tal como los devuelve el
//! backend remoto, y los overrides de la garantía específica del modelo.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::utils::validation::validate_integer_like;

/// Body de creación de un componente de garantía
#[derive(Debug, Deserialize, Validate)]
pub struct WarrantyPartPayload {
    #[validate(custom = "validate_integer_like")]
    pub vehicle_model_id: Value,
}

/// Query del listado de componentes
#[derive(Debug, Default, Deserialize)]
pub struct WarrantyPartsQuery {
    pub vehicle_model_id: Option<String>,
    pub vehicle_id: Option<String>,
}

/// Resultado de la combinación de componentes base + garantía del modelo
#[derive(Debug, Clone, Serialize)]
pub struct MergedWarrantyParts {
    pub components: Vec<Value>,
    pub model_warranty: Option<Value>,
    pub vehicle: Option<Value>,
    pub warnings: Vec<String>,
}
