//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre requests.

use anyhow::Result;
use std::sync::Arc;

use crate::clients::BackendClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::warranty_components::WarrantyCalculator;
use crate::services::warranty_fallback::{FallbackProvider, StaticWarrantyFallback};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub backend: BackendClient,
    pub fallback: Arc<dyn FallbackProvider>,
    pub calculator: WarrantyCalculator,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        Self::with_fallback(config, Arc::new(StaticWarrantyFallback))
    }

    /// Estado con un proveedor de datos de respaldo concreto
    pub fn with_fallback(
        config: EnvironmentConfig,
        fallback: Arc<dyn FallbackProvider>,
    ) -> Result<Self> {
        let backend = BackendClient::new(&config.backend_api_url, config.upstream_timeout)?;
        let calculator =
            WarrantyCalculator::new(config.warranty_start_date, config.assumed_odometer_km);

        Ok(Self {
            config,
            backend,
            fallback,
            calculator,
        })
    }
}
