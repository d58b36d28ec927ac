//! Modelos del sistema
//! 
//! DTOs de paso hacia el backend remoto. Las entidades las persiste el
//! backend; aquí solo se valida la forma mínima de la entrada.

pub mod customer;
pub mod service_item;
pub mod stock_movement;
pub mod vehicle;
pub mod warranty;
pub mod warranty_part;
