//! Totales de movimientos de inventario
//!
//! Agrega la lista de movimientos que devuelve el backend en totales por tipo.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::stock_movement::{MovementType, StockMovement};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockSummary {
    pub total_in: f64,
    pub total_out: f64,
    pub total_adjustment: f64,
    /// `in - out + adjustment`
    pub net: f64,
    pub movement_count: usize,
    /// Cantidad total por `reference_type`
    pub by_reference: BTreeMap<String, f64>,
    /// Registros con tipo desconocido o sin forma de movimiento
    pub ignored: usize,
}

impl StockSummary {
    pub fn from_movements(movements: &[StockMovement]) -> Self {
        let mut summary = Self::default();

        for movement in movements {
            let Some(kind) = MovementType::parse(&movement.movement_type) else {
                summary.ignored += 1;
                continue;
            };

            match kind {
                MovementType::In => summary.total_in += movement.quantity,
                MovementType::Out => summary.total_out += movement.quantity,
                MovementType::Adjustment => summary.total_adjustment += movement.quantity,
            }
            summary.movement_count += 1;

            if let Some(reference) = movement.reference_type.as_deref() {
                *summary.by_reference.entry(reference.to_string()).or_insert(0.0) +=
                    movement.quantity;
            }
        }

        summary.net = summary.total_in - summary.total_out + summary.total_adjustment;
        summary
    }

    /// Totales a partir del payload del backend (`[...]` o `{ data: [...] }`)
    pub fn from_payload(payload: &Value) -> Self {
        let records = payload
            .as_array()
            .or_else(|| payload.get("data").and_then(Value::as_array))
            .cloned()
            .unwrap_or_default();

        let mut movements = Vec::with_capacity(records.len());
        let mut malformed = 0;
        for record in records {
            match serde_json::from_value::<StockMovement>(record) {
                Ok(movement) => movements.push(movement),
                Err(e) => {
                    log::debug!("Movimiento ignorado: {}", e);
                    malformed += 1;
                }
            }
        }

        let mut summary = Self::from_movements(&movements);
        summary.ignored += malformed;
        summary
    }
}
