use serde::{Deserialize, Serialize};

/// Add-on that can be applied to an order line.
///
/// `costo_extra` is an amount when `tipo_aplicacion` is `FIJO` and a whole
/// percentage when it is `PORCENTAJE`; the backend interprets it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Variante {
    pub id_variante: i32,
    pub nombre: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub costo_extra: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tipo_aplicacion: String,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VarianteRequest {
    pub nombre: String,
    pub costo_extra: i64,
    pub tipo_aplicacion: String,
}
