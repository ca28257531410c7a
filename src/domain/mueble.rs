use serde::{Deserialize, Serialize};

/// Furniture item as listed by `/muebles`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mueble {
    pub id_mueble: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub nombre: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub precio_base: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub stock: i32,
    #[serde(default)]
    pub tamano: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub estado_logico: Option<bool>,
}

/// Body sent to create or update a mueble. Prices are whole pesos.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MuebleRequest {
    pub nombre: String,
    pub tipo: String,
    pub precio_base: i64,
    pub stock: i32,
    pub tamano: String,
    pub material: String,
}
