//! Data shapes exchanged with the muebleria backend API.
//!
//! Nothing here is persisted by the front end. Every value is decoded from a
//! backend response or encoded into a backend request and dropped once the
//! page is rendered.

pub mod auth;
pub mod mueble;
pub mod orden;
pub mod usuario;
pub mod variante;

use serde::{Deserialize, Deserializer};

/// Decodes a missing or `null` field as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
