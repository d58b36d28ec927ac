use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::utils::validation::validate_integer_like;

/// Body de una línea de servicio; el resto de campos es libre
#[derive(Debug, Deserialize, Validate)]
pub struct ServiceItemPayload {
    #[validate(custom = "validate_integer_like")]
    pub service_id: Value,
}
