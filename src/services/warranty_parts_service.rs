//! Combinación de componentes de garantía
//!
//! Hasta tres llamadas secuenciales al backend:
//! 1. componentes base del modelo (obligatoria)
//! 2. garantía específica del modelo (opcional, aplica overrides)
//! 3. datos del vehículo (opcional, solo con `vehicle_id`)
//!
//! Si fallan la 2 o la 3 se registra un aviso y se devuelve lo que haya.

use serde_json::{Map, Value};

use crate::api::proxy::upstream_error;
use crate::clients::{BackendClient, UpstreamResponse};
use crate::models::warranty_part::MergedWarrantyParts;
use crate::utils::errors::{transport_error, AppResult, ErrorShape};

pub const WARRANTY_PARTS_PATH: &str = "/api/warranty-parts";
pub const MODEL_WARRANTY_PATH: &str = "/api/warranty-parts/model-warranty";

const OVERRIDE_FIELDS: [&str; 3] = ["years", "kilometers", "applicable"];

pub struct WarrantyPartsService<'a> {
    backend: &'a BackendClient,
}

impl<'a> WarrantyPartsService<'a> {
    pub fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    pub async fn fetch_merged(
        &self,
        vehicle_model_id: i64,
        vehicle_id: Option<i64>,
    ) -> AppResult<MergedWarrantyParts> {
        let query = vec![("vehicle_model_id".to_string(), vehicle_model_id.to_string())];

        let base = self
            .backend
            .get(WARRANTY_PARTS_PATH, &query)
            .await
            .map_err(|e| transport_error("Failed to fetch warranty parts", e))?;
        if !base.is_success() {
            return Err(upstream_error(
                base,
                "Failed to fetch warranty parts",
                ErrorShape::WithStatus,
            ));
        }

        let mut merged = MergedWarrantyParts {
            components: list_of(&base.payload()),
            model_warranty: None,
            vehicle: None,
            warnings: Vec::new(),
        };

        match optional(self.backend.get(MODEL_WARRANTY_PATH, &query).await) {
            Ok(model_warranty) => {
                merged.components = apply_overrides(merged.components, &model_warranty);
                merged.model_warranty = Some(model_warranty);
            }
            Err(reason) => {
                log::warn!(
                    "⚠️ Garantía del modelo {} no disponible: {}",
                    vehicle_model_id,
                    reason
                );
                merged
                    .warnings
                    .push(format!("model warranty unavailable: {}", reason));
            }
        }

        if let Some(vehicle_id) = vehicle_id {
            let path = format!("/api/vehicles/{}", vehicle_id);
            match optional(self.backend.get(&path, &[]).await) {
                Ok(vehicle) => merged.vehicle = Some(vehicle),
                Err(reason) => {
                    log::warn!("⚠️ Vehículo {} no disponible: {}", vehicle_id, reason);
                    merged.warnings.push(format!("vehicle unavailable: {}", reason));
                }
            }
        }

        Ok(merged)
    }
}

/// Resultado de una llamada opcional: payload o motivo del fallo
fn optional(result: anyhow::Result<UpstreamResponse>) -> Result<Value, String> {
    match result {
        Ok(response) if response.is_success() => Ok(response.payload()),
        Ok(response) => Err(format!("upstream responded {}", response.status)),
        Err(e) => Err(format!("{:#}", e)),
    }
}

/// Lista de registros de un payload (`[...]`, `{ data: [...] }` o `{ components: [...] }`)
fn list_of(payload: &Value) -> Vec<Value> {
    payload
        .as_array()
        .or_else(|| payload.get("data").and_then(Value::as_array))
        .or_else(|| payload.get("components").and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}

fn component_name(component: &Value) -> Option<&str> {
    component
        .get("component_name")
        .or_else(|| component.get("name"))
        .and_then(Value::as_str)
}

/// Aplicar los valores de la garantía del modelo sobre los componentes base
pub fn apply_overrides(components: Vec<Value>, model_warranty: &Value) -> Vec<Value> {
    let overrides = list_of(model_warranty);
    if overrides.is_empty() {
        return components;
    }

    components
        .into_iter()
        .map(|mut component| {
            let matching = component_name(&component).and_then(|name| {
                overrides
                    .iter()
                    .find(|o| component_name(o).is_some_and(|n| n.eq_ignore_ascii_case(name)))
            });

            if let (Some(source), Value::Object(target)) = (matching, &mut component) {
                copy_fields(source, target);
                target.insert("source".to_string(), Value::from("model_warranty"));
            }
            component
        })
        .collect()
}

fn copy_fields(source: &Value, target: &mut Map<String, Value>) {
    for field in OVERRIDE_FIELDS {
        if let Some(value) = source.get(field).filter(|v| !v.is_null()) {
            target.insert(field.to_string(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overrides_match_by_component_name() {
        let base = vec![
            json!({ "component_name": "Engine", "years": 5, "kilometers": 100000 }),
            json!({ "component_name": "Car Paint", "years": 3, "kilometers": 60000 }),
        ];
        let model = json!({
            "data": [{ "component_name": "engine", "years": 10, "kilometers": null }]
        });

        let merged = apply_overrides(base, &model);
        assert_eq!(merged[0]["years"], 10);
        assert_eq!(merged[0]["kilometers"], 100000);
        assert_eq!(merged[0]["source"], "model_warranty");
        assert_eq!(
            merged[1],
            json!({ "component_name": "Car Paint", "years": 3, "kilometers": 60000 })
        );
    }

    #[test]
    fn test_no_overrides_keeps_components() {
        let base = vec![json!({ "name": "Engine", "years": 5 })];
        assert_eq!(apply_overrides(base.clone(), &json!({ "message": "none" })), base);
    }

    #[test]
    fn test_list_of_shapes() {
        assert_eq!(list_of(&json!([1, 2])).len(), 2);
        assert_eq!(list_of(&json!({ "data": [1] })).len(), 1);
        assert_eq!(list_of(&json!({ "components": [1, 2, 3] })).len(), 3);
        assert!(list_of(&json!({ "message": "x" })).is_empty());
    }
}
