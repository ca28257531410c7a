use serde::Deserialize;

use crate::domain::mueble::MuebleRequest;
use crate::forms::{FormError, parse_int};

#[derive(Debug, Deserialize)]
/// Create/edit form for a furniture item. Numeric fields arrive as text.
pub struct MuebleForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default, rename = "precioBase")]
    pub precio_base: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub tamano: String,
    #[serde(default)]
    pub material: String,
}

impl TryFrom<MuebleForm> for MuebleRequest {
    type Error = FormError;

    fn try_from(form: MuebleForm) -> Result<Self, Self::Error> {
        Ok(Self {
            precio_base: parse_int("precioBase", &form.precio_base)?,
            stock: parse_int("stock", &form.stock)?,
            nombre: form.nombre.trim().to_string(),
            tipo: form.tipo.trim().to_string(),
            tamano: form.tamano.trim().to_string(),
            material: form.material.trim().to_string(),
        })
    }
}
