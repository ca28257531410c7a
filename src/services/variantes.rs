//! Add-on (variante) administration.

use serde_json::Value;

use crate::api::{Backend, BackendExt, endpoints};
use crate::domain::variante::{Variante, VarianteRequest};
use crate::dto::variantes::VariantesOutcome;
use crate::forms::variantes::VarianteForm;
use crate::services::ServiceResult;

pub const CREATED_MESSAGE: &str = "Variante creada exitosamente";
pub const UPDATED_MESSAGE: &str = "Variante actualizada exitosamente";
pub const DELETED_MESSAGE: &str = "Variante eliminada exitosamente";

pub async fn list_variantes<B>(api: &B, token: Option<&str>) -> Vec<Variante>
where
    B: Backend + ?Sized,
{
    api.get(endpoints::VARIANTES, token).await.unwrap_or_default()
}

pub async fn get_variante<B>(api: &B, token: &str, id: i32) -> Option<Variante>
where
    B: Backend + ?Sized,
{
    api.get(&endpoints::variante(id), Some(token)).await.ok()
}

async fn refreshed<B>(api: &B, token: &str, success: &'static str) -> VariantesOutcome
where
    B: Backend + ?Sized,
{
    VariantesOutcome {
        variantes: list_variantes(api, Some(token)).await,
        success,
    }
}

pub async fn create_variante<B>(
    api: &B,
    token: &str,
    form: VarianteForm,
) -> ServiceResult<VariantesOutcome>
where
    B: Backend + ?Sized,
{
    let request = VarianteRequest::try_from(form)?;
    api.post::<_, Value>(endpoints::VARIANTES, &request, Some(token))
        .await?;

    Ok(refreshed(api, token, CREATED_MESSAGE).await)
}

pub async fn update_variante<B>(
    api: &B,
    token: &str,
    id: i32,
    form: VarianteForm,
) -> ServiceResult<VariantesOutcome>
where
    B: Backend + ?Sized,
{
    let request = VarianteRequest::try_from(form)?;
    api.put::<_, Value>(&endpoints::variante(id), &request, Some(token))
        .await?;

    Ok(refreshed(api, token, UPDATED_MESSAGE).await)
}

pub async fn delete_variante<B>(api: &B, token: &str, id: i32) -> ServiceResult<VariantesOutcome>
where
    B: Backend + ?Sized,
{
    api.delete(&endpoints::variante(id), Some(token)).await?;

    Ok(refreshed(api, token, DELETED_MESSAGE).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiMethod;
    use crate::api::mock::MockBackend;

    #[actix_web::test]
    async fn update_puts_to_item_endpoint() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Put
                    && req.endpoint == "/variantes/4"
                    && req.body
                        == Some(json!({"nombre": "Cojín", "costoExtra": 5000, "tipoAplicacion": "FIJO"}))
            })
            .times(1)
            .returning(|_| Ok(json!({})));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/variantes")
            .times(1)
            .returning(|_| {
                Ok(json!([{"idVariante": 4, "nombre": "Cojín", "costoExtra": 5000, "tipoAplicacion": "FIJO"}]))
            });
        let form = VarianteForm {
            nombre: "Cojín".to_string(),
            costo_extra: "5000".to_string(),
            tipo_aplicacion: "FIJO".to_string(),
        };

        let outcome = update_variante(&api, "jwt", 4, form).await.unwrap();

        assert_eq!(outcome.success, UPDATED_MESSAGE);
        assert_eq!(outcome.variantes[0].costo_extra, 5000);
    }

    #[actix_web::test]
    async fn delete_refetches_list() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Delete && req.endpoint == "/variantes/4")
            .times(1)
            .returning(|_| Ok(Value::Null));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/variantes")
            .times(1)
            .returning(|_| Ok(json!([])));

        let outcome = delete_variante(&api, "jwt", 4).await.unwrap();

        assert_eq!(outcome.success, DELETED_MESSAGE);
        assert!(outcome.variantes.is_empty());
    }
}
