//! Modelo de Customer
//!
//! El cliente pertenece al backend remoto; aquí solo se valida la forma
//! mínima del body antes de reenviarlo.

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Body de creación/actualización de un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerPayload {
    #[validate(custom = "validate_not_empty", length(max = 255))]
    pub name: String,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    pub address: Option<String>,
}
