//! Gateway de postventa
//!
//! Capa proxy entre el frontend de postventa (clientes, vehículos, garantías,
//! servicios, inventario) y el backend remoto PHP/MySQL.

pub mod api;
pub mod clients;
pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use api::build_router;
pub use config::EnvironmentConfig;
pub use state::AppState;
