//! Modelo de StockMovement
//!
//! Lista de solo lectura. MySQL devuelve a menudo los números como strings,
//! por eso la cantidad acepta ambos formatos.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tipo de movimiento de inventario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    In,
    Out,
    Adjustment,
}

impl MovementType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "adjustment" => Some(Self::Adjustment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: Option<Value>,
    pub item_id: Option<Value>,
    pub movement_type: String,
    #[serde(deserialize_with = "number_or_string")]
    pub quantity: f64,
    /// `purchase`, `service`, `adjustment` o `return`
    pub reference_type: Option<String>,
    pub created_at: Option<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("quantity out of range")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid quantity '{}'", s))),
        other => Err(serde::de::Error::custom(format!(
            "quantity must be a number, got {}",
            other
        ))),
    }
}
