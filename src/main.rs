use aftersales_gateway::{build_router, AppState, EnvironmentConfig};
use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🔧 After-sales Gateway - Proxy hacia el backend de postventa");
    info!("================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {:#}", e);
            return Err(e);
        }
    };

    info!("🌍 Entorno: {}", config.environment);
    info!("🌐 Backend remoto: {}", config.backend_api_url);
    if config.developer_mode {
        warn!("⚠️ Modo desarrollador activo: todas las requests usan un administrador fijo");
    }
    if config.is_development() && config.cors_origins.is_empty() {
        info!("🔓 CORS permisivo: no hay CORS_ORIGINS configurados");
    }
    if config.upstream_timeout.is_none() {
        info!("⏱️ Sin timeout configurado para el backend remoto");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(config)?);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("   GET|POST|PUT|DELETE /api/customers");
    info!("   GET|POST /api/vehicles - GET|PUT|DELETE /api/vehicles/:id");
    info!("   GET|POST /api/warranties - GET|PUT|DELETE /api/warranties/:id");
    info!("   GET|POST|PUT|DELETE /api/service-items");
    info!("   GET|POST|DELETE /api/warranty-parts");
    info!("   GET  /api/stock-movements - GET /api/stock-movements/summary");
    info!("   GET  /api/warranty-components?model=");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
