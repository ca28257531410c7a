use serde::Deserialize;

use crate::domain::variante::VarianteRequest;
use crate::forms::{FormError, parse_int};

#[derive(Debug, Deserialize)]
pub struct VarianteForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default, rename = "costoExtra")]
    pub costo_extra: String,
    #[serde(default, rename = "tipoAplicacion")]
    pub tipo_aplicacion: String,
}

impl TryFrom<VarianteForm> for VarianteRequest {
    type Error = FormError;

    fn try_from(form: VarianteForm) -> Result<Self, Self::Error> {
        Ok(Self {
            costo_extra: parse_int("costoExtra", &form.costo_extra)?,
            nombre: form.nombre.trim().to_string(),
            tipo_aplicacion: form.tipo_aplicacion.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_cost_to_integer() {
        let request = VarianteRequest::try_from(VarianteForm {
            nombre: "Barniz".to_string(),
            costo_extra: "10".to_string(),
            tipo_aplicacion: "PORCENTAJE".to_string(),
        })
        .unwrap();

        assert_eq!(request.costo_extra, 10);
        assert_eq!(request.tipo_aplicacion, "PORCENTAJE");
    }

    #[test]
    fn rejects_empty_cost() {
        let result = VarianteRequest::try_from(VarianteForm {
            nombre: "Barniz".to_string(),
            costo_extra: "".to_string(),
            tipo_aplicacion: "FIJO".to_string(),
        });

        assert!(matches!(result, Err(FormError::InvalidNumber(_))));
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let form: VarianteForm = serde_html_form::from_str("nombre=Barniz").unwrap();

        assert!(form.costo_extra.is_empty());
        assert!(form.tipo_aplicacion.is_empty());
    }
}
