//! Calculador de cobertura por componente
//!
//! Tabla fija modelo -> componentes cubiertos. La cobertura restante se calcula
//! en cada request a partir de una fecha de inicio fija y un odómetro asumido.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Modelo usado cuando el modelo pedido no está en la tabla
pub const DEFAULT_MODEL: &str = "SOBEN";

pub const ENGINE: &str = "Engine";
pub const CAR_PAINT: &str = "Car Paint";
pub const TRANSMISSION: &str = "Transmission (gearbox)";
pub const ELECTRICAL_SYSTEM: &str = "Electrical System";
pub const BATTERY_HYBRID: &str = "Battery Hybrid";

const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CoverageRule {
    years: u32,
    kilometers: u32,
    applicable: bool,
}

const fn covered(years: u32, kilometers: u32) -> CoverageRule {
    CoverageRule {
        years,
        kilometers,
        applicable: true,
    }
}

const NOT_COVERED: CoverageRule = CoverageRule {
    years: 0,
    kilometers: 0,
    applicable: false,
};

type ModelTable = [(&'static str, CoverageRule); 5];

const SOBEN: ModelTable = [
    (ENGINE, covered(10, 200_000)),
    (CAR_PAINT, covered(10, 200_000)),
    (TRANSMISSION, covered(5, 100_000)),
    (ELECTRICAL_SYSTEM, covered(5, 100_000)),
    (BATTERY_HYBRID, NOT_COVERED),
];

const KAIN: ModelTable = [
    (ENGINE, covered(10, 200_000)),
    (CAR_PAINT, covered(10, 200_000)),
    (TRANSMISSION, covered(5, 100_000)),
    (ELECTRICAL_SYSTEM, covered(5, 100_000)),
    (BATTERY_HYBRID, covered(8, 150_000)),
];

const KOUPREY: ModelTable = [
    (ENGINE, covered(7, 150_000)),
    (CAR_PAINT, covered(7, 150_000)),
    (TRANSMISSION, covered(5, 100_000)),
    (ELECTRICAL_SYSTEM, covered(3, 60_000)),
    (BATTERY_HYBRID, NOT_COVERED),
];

const MODELS: [(&str, &ModelTable); 3] = [("SOBEN", &SOBEN), ("KAIN", &KAIN), ("KOUPREY", &KOUPREY)];

/// Estado de cobertura de un componente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Active,
    NotApplicable,
}

/// Cobertura calculada de un componente
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCoverage {
    pub years: u32,
    pub kilometers: u32,
    pub applicable: bool,
    pub remaining_years: f64,
    pub remaining_km: u32,
    pub status: CoverageStatus,
}

/// Componentes indexados por nombre
pub type WarrantyComponents = BTreeMap<String, ComponentCoverage>;

/// Nombre canónico del modelo en la tabla; los desconocidos caen en `SOBEN`
pub fn resolve_model(model: &str) -> &'static str {
    let wanted = model.trim().to_ascii_uppercase();
    MODELS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(name, _)| *name)
        .unwrap_or(DEFAULT_MODEL)
}

fn table_for(model: &str) -> &'static ModelTable {
    let name = resolve_model(model);
    MODELS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, table)| *table)
        .unwrap_or(&SOBEN)
}

#[derive(Debug, Clone, Copy)]
pub struct WarrantyCalculator {
    pub start_date: NaiveDate,
    /// Lectura asumida del odómetro, no la real del vehículo
    pub assumed_odometer_km: u32,
}

impl WarrantyCalculator {
    pub fn new(start_date: NaiveDate, assumed_odometer_km: u32) -> Self {
        Self {
            start_date,
            assumed_odometer_km,
        }
    }

    /// Cobertura de cada componente para `model` a fecha `today`
    pub fn calculate(&self, model: &str, today: NaiveDate) -> WarrantyComponents {
        let elapsed_years = (today - self.start_date).num_days() as f64 / DAYS_PER_YEAR;

        table_for(model)
            .iter()
            .map(|(name, rule)| {
                let coverage = ComponentCoverage {
                    years: rule.years,
                    kilometers: rule.kilometers,
                    applicable: rule.applicable,
                    remaining_years: (rule.years as f64 - elapsed_years).max(0.0),
                    remaining_km: rule.kilometers.saturating_sub(self.assumed_odometer_km),
                    status: if rule.applicable {
                        CoverageStatus::Active
                    } else {
                        CoverageStatus::NotApplicable
                    },
                };
                (name.to_string(), coverage)
            })
            .collect()
    }

    /// Igual que [`calculate`](Self::calculate) usando la fecha actual (UTC)
    pub fn calculate_now(&self, model: &str) -> WarrantyComponents {
        self.calculate(model, Utc::now().date_naive())
    }
}
