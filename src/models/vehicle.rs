//! Modelo de Vehicle
//!
//! La unicidad de matrícula y VIN la controla el backend remoto.

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Body de creación de un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct VehiclePayload {
    #[serde(alias = "license_plate")]
    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub plate: String,

    #[validate(length(max = 17))]
    pub vin: Option<String>,

    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    pub category: Option<String>,
}
