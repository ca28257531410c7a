//! Order creation form.
//!
//! The browser posts a variable number of lines as indexed fields
//! (`detalles[0][idMueble]`, `detalles[0][cantidad]`,
//! `detalles[0][variantes]`, ...) together with `num_detalles`. Only indices
//! below `num_detalles` are considered, and a line missing its mueble or its
//! quantity is skipped.

use std::collections::BTreeMap;

use crate::domain::orden::{CrearOrdenRequest, DetalleRequest};
use crate::forms::{FormError, parse_int};

/// Raw fields of one order line, exactly as posted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineaOrdenForm {
    pub id_mueble: Option<String>,
    pub cantidad: Option<String>,
    pub variantes: Option<String>,
}

impl LineaOrdenForm {
    fn is_complete(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.id_mueble) && present(&self.cantidad)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NuevaOrdenForm {
    pub num_detalles: usize,
    pub lineas: BTreeMap<usize, LineaOrdenForm>,
}

/// Splits `detalles[3][cantidad]` into `(3, "cantidad")`.
fn parse_indexed_key(key: &str) -> Option<(usize, &str)> {
    let rest = key.strip_prefix("detalles[")?;
    let (index, field) = rest.split_once("][")?;
    let field = field.strip_suffix(']')?;
    Some((index.parse().ok()?, field))
}

impl NuevaOrdenForm {
    /// Parses an `application/x-www-form-urlencoded` body. When a key repeats,
    /// the first value wins.
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        let pairs: Vec<(String, String)> =
            serde_html_form::from_bytes(body).map_err(|e| FormError::Malformed(e.to_string()))?;

        let mut form = NuevaOrdenForm::default();
        let mut num_detalles_seen = false;

        for (key, value) in pairs {
            if key == "num_detalles" {
                if !num_detalles_seen {
                    form.num_detalles = if value.trim().is_empty() {
                        0
                    } else {
                        parse_int("num_detalles", &value)?
                    };
                    num_detalles_seen = true;
                }
                continue;
            }

            let Some((index, field)) = parse_indexed_key(&key) else {
                continue;
            };
            let linea = form.lineas.entry(index).or_default();
            let slot = match field {
                "idMueble" => &mut linea.id_mueble,
                "cantidad" => &mut linea.cantidad,
                "variantes" => &mut linea.variantes,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        Ok(form)
    }

    /// Converts the complete lines into backend detail requests, in index order.
    pub fn into_detalles(self) -> Result<Vec<DetalleRequest>, FormError> {
        let num_detalles = self.num_detalles;
        self.lineas
            .into_iter()
            .filter(|(index, linea)| *index < num_detalles && linea.is_complete())
            .map(|(_, linea)| -> Result<DetalleRequest, FormError> {
                let id_mueble = linea.id_mueble.unwrap_or_default();
                let cantidad = linea.cantidad.unwrap_or_default();
                let ids_variantes = linea
                    .variantes
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| parse_int("variantes", v))
                    .collect::<Result<Vec<i32>, FormError>>()?;

                Ok(DetalleRequest {
                    id_mueble: parse_int("idMueble", &id_mueble)?,
                    cantidad: parse_int("cantidad", &cantidad)?,
                    ids_variantes,
                })
            })
            .collect()
    }
}

impl TryFrom<NuevaOrdenForm> for CrearOrdenRequest {
    type Error = FormError;

    fn try_from(form: NuevaOrdenForm) -> Result<Self, Self::Error> {
        Ok(Self {
            detalles: form.into_detalles()?,
        })
    }
}
