//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores y validación
//! de la entrada de los handlers.

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
