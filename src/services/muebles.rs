//! Furniture catalog administration.

use serde_json::Value;

use crate::api::{Backend, BackendExt, endpoints};
use crate::domain::mueble::{Mueble, MuebleRequest};
use crate::dto::muebles::MueblesOutcome;
use crate::forms::muebles::MuebleForm;
use crate::services::ServiceResult;

pub const CREATED_MESSAGE: &str = "Mueble creado exitosamente";
pub const UPDATED_MESSAGE: &str = "Mueble actualizado exitosamente";
pub const DELETED_MESSAGE: &str = "Mueble eliminado exitosamente";

/// Lists every mueble; an unreachable backend yields an empty list.
pub async fn list_muebles<B>(api: &B, token: Option<&str>) -> Vec<Mueble>
where
    B: Backend + ?Sized,
{
    api.get(endpoints::MUEBLES, token).await.unwrap_or_default()
}

/// Fetches one mueble to pre-populate the edit form.
pub async fn get_mueble<B>(api: &B, token: &str, id: i32) -> Option<Mueble>
where
    B: Backend + ?Sized,
{
    api.get(&endpoints::mueble(id), Some(token)).await.ok()
}

async fn refreshed<B>(api: &B, token: &str, success: &'static str) -> MueblesOutcome
where
    B: Backend + ?Sized,
{
    MueblesOutcome {
        muebles: list_muebles(api, Some(token)).await,
        success,
    }
}

pub async fn create_mueble<B>(api: &B, token: &str, form: MuebleForm) -> ServiceResult<MueblesOutcome>
where
    B: Backend + ?Sized,
{
    let request = MuebleRequest::try_from(form)?;
    api.post::<_, Value>(endpoints::MUEBLES, &request, Some(token))
        .await?;

    Ok(refreshed(api, token, CREATED_MESSAGE).await)
}

pub async fn update_mueble<B>(
    api: &B,
    token: &str,
    id: i32,
    form: MuebleForm,
) -> ServiceResult<MueblesOutcome>
where
    B: Backend + ?Sized,
{
    let request = MuebleRequest::try_from(form)?;
    api.put::<_, Value>(&endpoints::mueble(id), &request, Some(token))
        .await?;

    Ok(refreshed(api, token, UPDATED_MESSAGE).await)
}

pub async fn delete_mueble<B>(api: &B, token: &str, id: i32) -> ServiceResult<MueblesOutcome>
where
    B: Backend + ?Sized,
{
    api.delete(&endpoints::mueble(id), Some(token)).await?;

    Ok(refreshed(api, token, DELETED_MESSAGE).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiMethod;
    use crate::api::mock::{MockBackend, backend_failure};
    use crate::services::ServiceError;

    fn form(precio: &str) -> MuebleForm {
        MuebleForm {
            nombre: "Mesa".to_string(),
            tipo: "Comedor".to_string(),
            precio_base: precio.to_string(),
            stock: "2".to_string(),
            tamano: "GRANDE".to_string(),
            material: "Pino".to_string(),
        }
    }

    fn mesa() -> Value {
        json!({"idMueble": 7, "nombre": "Mesa", "precioBase": 50000, "stock": 2})
    }

    #[actix_web::test]
    async fn create_posts_payload_and_refetches() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Post
                    && req.endpoint == "/muebles"
                    && req.token.as_deref() == Some("jwt")
                    && req.body.as_ref().map(|b| b["precioBase"].clone()) == Some(json!(50000))
            })
            .times(1)
            .returning(|_| Ok(mesa()));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/muebles")
            .times(1)
            .returning(|_| Ok(json!([mesa()])));

        let outcome = create_mueble(&api, "jwt", form("50000")).await.unwrap();

        assert_eq!(outcome.success, CREATED_MESSAGE);
        assert_eq!(outcome.muebles[0].id_mueble, 7);
    }

    #[actix_web::test]
    async fn bad_price_never_reaches_backend() {
        let mut api = MockBackend::new();
        api.expect_send().times(0);

        let result = create_mueble(&api, "jwt", form("mucho")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn failed_delete_is_an_error() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Delete && req.endpoint == "/muebles/7")
            .times(1)
            .returning(|_| Err(backend_failure()));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get)
            .times(0);

        let result = delete_mueble(&api, "jwt", 7).await;

        assert!(matches!(result, Err(ServiceError::Api(_))));
    }

    #[actix_web::test]
    async fn list_degrades_to_empty() {
        let mut api = MockBackend::new();
        api.expect_send().returning(|_| Err(backend_failure()));

        assert!(list_muebles(&api, None).await.is_empty());
    }
}
