use serde::{Deserialize, Serialize};

/// Lifecycle state of an order. Transitions are enforced by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoOrden {
    /// Quote, still editable.
    Cotizacion,
    /// Confirmed sale with frozen prices.
    Venta,
    Cancelada,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Orden {
    pub id_orden: i32,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub fecha_confirmacion: Option<String>,
    pub estado_orden: EstadoOrden,
    #[serde(default)]
    pub total_calculado: Option<i64>,
    #[serde(default)]
    pub detalles: Vec<DetalleOrden>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetalleOrden {
    pub id_detalle: i32,
    pub id_mueble: i32,
    #[serde(default)]
    pub nombre_mueble: Option<String>,
    pub cantidad: i32,
    #[serde(default)]
    pub precio_unitario_final: Option<i64>,
    #[serde(default)]
    pub variantes: Vec<VarianteAplicada>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VarianteAplicada {
    pub id_variante: i32,
    pub nombre: String,
    #[serde(default)]
    pub precio_aplicado_snapshot: Option<i64>,
}

/// One requested order line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetalleRequest {
    pub id_mueble: i32,
    pub cantidad: i32,
    pub ids_variantes: Vec<i32>,
}

/// Body sent to `POST /ordenes`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrearOrdenRequest {
    pub detalles: Vec<DetalleRequest>,
}
