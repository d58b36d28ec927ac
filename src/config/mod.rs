//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración del entorno: URL del backend remoto,
//! modo desarrollador y constantes del cálculo de garantías.

pub mod environment;

pub use environment::*;
