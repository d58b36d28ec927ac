//! Cliente HTTP para el backend remoto (PHP/MySQL)
//!
//! Todas las rutas se concatenan sin cambios al origen configurado. El cliente
//! nunca falla por un estado fuera de 2xx: quien llama inspecciona el estado.
//! No hay reintentos.

use anyhow::{Context, Result};
use http::{header, HeaderMap, Method, StatusCode};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Respuesta cruda del backend remoto
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl UpstreamResponse {
    /// Estado dentro del rango 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body normalizado: JSON si se puede parsear, `{ message: <texto> }` si no
    pub fn payload(&self) -> Value {
        parse_body(&self.body)
    }
}

/// Parsear el texto de una respuesta sin fallar nunca.
///
/// El backend no siempre devuelve JSON válido (avisos de PHP, HTML de error...).
pub fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({ "message": raw }))
}

/// Cliente HTTP para el backend de postventa
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Crear nuevo cliente HTTP con la URL base configurable
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL completa para una ruta del backend (`/api/customers`, ...)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ejecutar una llamada contra el backend y devolver estado, headers y texto
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<UpstreamResponse> {
        let url = self.url(path);
        log::info!("🌐 {} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, url))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        log::info!(
            "📡 {} {} -> {} ({})",
            method,
            path,
            status,
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("sin content-type")
        );

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<UpstreamResponse> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<UpstreamResponse> {
        self.send(Method::PUT, path, query, Some(body)).await
    }

    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<UpstreamResponse> {
        self.send(Method::DELETE, path, query, None).await
    }
}
