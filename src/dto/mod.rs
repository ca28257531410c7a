//! DTO modules that bridge services with templates.

pub mod admin;
pub mod catalogo;
pub mod muebles;
pub mod ordenes;
pub mod usuarios;
pub mod variantes;
