use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::utils::validation::validate_integer_like;

/// Body de creación de una garantía
#[derive(Debug, Deserialize, Validate)]
pub struct WarrantyPayload {
    #[validate(custom = "validate_integer_like")]
    pub vehicle_id: Value,

    pub warranty_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Filtros admitidos por el listado de garantías
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WarrantyFilters {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl WarrantyFilters {
    /// Parámetros de query a reenviar (solo los presentes)
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(("status".to_string(), status.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        query
    }
}
