//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La URL del backend remoto
//! se inyecta al arrancar (nunca está compilada) para que los tests puedan
//! redirigir las llamadas a un servidor mock.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::env;
use std::time::Duration;

/// Fecha de inicio de garantía usada por el calculador de componentes
pub const DEFAULT_WARRANTY_START_DATE: &str = "2024-01-01";

/// Kilometraje asumido cuando no se conoce la lectura real del odómetro
pub const DEFAULT_ASSUMED_ODOMETER_KM: u32 = 25_000;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Origen del backend PHP/MySQL, sin `/` final
    pub backend_api_url: String,
    /// `None` deja el comportamiento por defecto de la plataforma (sin timeout)
    pub upstream_timeout: Option<Duration>,
    /// Inyecta un usuario administrador fijo en cada request
    pub developer_mode: bool,
    pub warranty_start_date: NaiveDate,
    pub assumed_odometer_km: u32,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración a partir de una función de búsqueda de claves
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_api_url = lookup("BACKEND_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow!("BACKEND_API_URL must be set"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            None => 3000,
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("UPSTREAM_TIMEOUT_SECS must be a valid number, got '{}'", raw)
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let warranty_start_date = NaiveDate::parse_from_str(
            lookup("WARRANTY_START_DATE")
                .as_deref()
                .unwrap_or(DEFAULT_WARRANTY_START_DATE)
                .trim(),
            "%Y-%m-%d",
        )
        .context("WARRANTY_START_DATE must use the YYYY-MM-DD format")?;

        let assumed_odometer_km = match lookup("ASSUMED_ODOMETER_KM") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("ASSUMED_ODOMETER_KM must be a valid number, got '{}'", raw)
            })?,
            None => DEFAULT_ASSUMED_ODOMETER_KM,
        };

        let config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            backend_api_url: normalize_base_url(&backend_api_url),
            upstream_timeout,
            developer_mode: lookup("DEVELOPER_MODE")
                .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
            warranty_start_date,
            assumed_odometer_km,
        };

        // El usuario fijo del modo desarrollador no puede llegar a producción
        if config.is_production() && config.developer_mode {
            return Err(anyhow!("DEVELOPER_MODE cannot be enabled in production"));
        }

        Ok(config)
    }

    /// Configuración mínima apuntando a un backend concreto (tests y herramientas)
    pub fn for_upstream(backend_api_url: &str) -> Self {
        Self {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            backend_api_url: normalize_base_url(backend_api_url),
            upstream_timeout: None,
            developer_mode: true,
            warranty_start_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap_or(NaiveDate::MIN),
            assumed_odometer_km: DEFAULT_ASSUMED_ODOMETER_KM,
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
