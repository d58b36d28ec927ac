//! Services module
//! 
//! Este módulo contiene la lógica que no es un simple reenvío al backend:
//! datos de respaldo de garantías, cálculo de cobertura por componente,
//! combinación de componentes de garantía y totales de inventario.

pub mod stock_summary;
pub mod warranty_components;
pub mod warranty_fallback;
pub mod warranty_parts_service;

pub use stock_summary::StockSummary;
pub use warranty_components::WarrantyCalculator;
pub use warranty_fallback::{FallbackProvider, StaticWarrantyFallback};
