//! Datos de respaldo para las lecturas de garantías
//!
//! Cuando la llamada al backend falla por transporte, las lecturas de garantías
//! devuelven datos sintéticos marcados con `debug_fallback_data: true` para que
//! el frontend siga poblado. Solo los handlers GET de garantías usan esto.

use serde_json::{json, Value};

/// Marca que distingue los datos sintéticos de los reales
pub const FALLBACK_MARKER: &str = "debug_fallback_data";

/// Proveedor de datos de respaldo para garantías
pub trait FallbackProvider: Send + Sync {
    /// Payload sustituto de la lista de garantías
    fn warranty_list(&self) -> Value;

    /// Payload sustituto del detalle de una garantía
    fn warranty_detail(&self, id: i64) -> Value;
}

/// Lista fija de garantías de ejemplo
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWarrantyFallback;

fn sample_warranties() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "vehicle_id": 1,
            "warranty_type": "standard",
            "start_date": "2024-01-01",
            "end_date": "2027-01-01",
            "km_limit": 100000,
            "max_services": 10,
            "status": "active",
            "customer_name": "Sample Customer",
            "license_plate": "2A-0001",
            "vehicle_model": "SOBEN",
            "services_used": 2,
            "total_services_amount": 180.0,
            "last_service_date": "2024-09-15",
        }),
        json!({
            "id": 2,
            "vehicle_id": 2,
            "warranty_type": "extended",
            "start_date": "2023-06-01",
            "end_date": "2028-06-01",
            "km_limit": 150000,
            "max_services": 15,
            "status": "active",
            "customer_name": "Sample Fleet",
            "license_plate": "2B-0002",
            "vehicle_model": "KAIN",
            "services_used": 5,
            "total_services_amount": 455.5,
            "last_service_date": "2024-11-02",
        }),
        json!({
            "id": 3,
            "vehicle_id": 3,
            "warranty_type": "standard",
            "start_date": "2020-03-01",
            "end_date": "2023-03-01",
            "km_limit": 100000,
            "max_services": 10,
            "status": "expired",
            "customer_name": "Sample Customer",
            "license_plate": "2C-0003",
            "vehicle_model": "KOUPREY",
            "services_used": 10,
            "total_services_amount": 920.0,
            "last_service_date": "2023-02-10",
        }),
    ]
}

fn mark(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.insert(FALLBACK_MARKER.to_string(), Value::Bool(true));
    }
    value
}

impl FallbackProvider for StaticWarrantyFallback {
    fn warranty_list(&self) -> Value {
        let warranties: Vec<Value> = sample_warranties().into_iter().map(mark).collect();
        json!({
            "total": warranties.len(),
            "warranties": warranties,
            FALLBACK_MARKER: true,
        })
    }

    fn warranty_detail(&self, id: i64) -> Value {
        let mut detail = sample_warranties()
            .into_iter()
            .next()
            .unwrap_or_else(|| json!({}));
        if let Value::Object(map) = &mut detail {
            map.insert("id".to_string(), json!(id));
            map.insert("services".to_string(), json!([]));
        }
        mark(detail)
    }
}

/// Indica si un payload es sintético
pub fn is_fallback(payload: &Value) -> bool {
    payload
        .get(FALLBACK_MARKER)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
