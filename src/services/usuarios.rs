//! User administration: role changes and activation toggles.

use crate::api::{Backend, BackendExt, endpoints};
use crate::domain::auth::Role;
use crate::domain::usuario::{ActivacionActualizada, ActualizarRolRequest, RolActualizado, Usuario};
use crate::dto::usuarios::UsuariosOutcome;
use crate::services::ServiceResult;

pub const PROMOTED_MESSAGE: &str = "Usuario promovido a ADMIN exitosamente";
pub const DEMOTED_MESSAGE: &str = "Usuario degradado a USER exitosamente";
pub const ACTIVATED_MESSAGE: &str = "Usuario activado exitosamente";
pub const DEACTIVATED_MESSAGE: &str = "Usuario desactivado exitosamente";

pub async fn list_usuarios<B>(api: &B, token: &str) -> Vec<Usuario>
where
    B: Backend + ?Sized,
{
    api.get(endpoints::USUARIOS, Some(token))
        .await
        .unwrap_or_default()
}

/// Requests `role` for the user; the message reflects the role the backend
/// reports back.
pub async fn cambiar_rol<B>(api: &B, token: &str, id: i64, role: Role) -> ServiceResult<UsuariosOutcome>
where
    B: Backend + ?Sized,
{
    let request = ActualizarRolRequest {
        rol: role.as_str().to_string(),
    };
    let response: RolActualizado = api
        .put(&endpoints::rol_usuario(id), &request, Some(token))
        .await?;

    let success = match Role::from_backend(&response.nuevo_rol) {
        Role::Admin => PROMOTED_MESSAGE,
        Role::User => DEMOTED_MESSAGE,
    };

    Ok(UsuariosOutcome {
        usuarios: list_usuarios(api, token).await,
        success,
    })
}

/// Flips the activation flag; the message reflects the resulting state.
pub async fn toggle_activo<B>(api: &B, token: &str, id: i64) -> ServiceResult<UsuariosOutcome>
where
    B: Backend + ?Sized,
{
    let response: ActivacionActualizada = api
        .put(&endpoints::activar_usuario(id), &serde_json::json!({}), Some(token))
        .await?;

    let success = if response.activo {
        ACTIVATED_MESSAGE
    } else {
        DEACTIVATED_MESSAGE
    };

    Ok(UsuariosOutcome {
        usuarios: list_usuarios(api, token).await,
        success,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiMethod;
    use crate::api::mock::{MockBackend, backend_failure};

    fn expect_user_list(api: &mut MockBackend) {
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/usuarios")
            .times(1)
            .returning(|_| {
                Ok(json!([{"id": 7, "username": "ana", "rol": "USER", "activo": true}]))
            });
    }

    #[actix_web::test]
    async fn promotion_message_follows_returned_role() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Put
                    && req.endpoint == "/usuarios/7/rol"
                    && req.body == Some(json!({"rol": "ADMIN"}))
            })
            .times(1)
            .returning(|_| {
                Ok(json!({"message": "Rol actualizado exitosamente", "username": "ana", "nuevoRol": "ADMIN"}))
            });
        expect_user_list(&mut api);

        let outcome = cambiar_rol(&api, "jwt", 7, Role::Admin).await.unwrap();

        assert_eq!(outcome.success, "Usuario promovido a ADMIN exitosamente");
    }

    #[actix_web::test]
    async fn demotion_message() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Put && req.endpoint == "/usuarios/7/rol")
            .times(1)
            .returning(|_| Ok(json!({"nuevoRol": "USER"})));
        expect_user_list(&mut api);

        let outcome = cambiar_rol(&api, "jwt", 7, Role::User).await.unwrap();

        assert_eq!(outcome.success, DEMOTED_MESSAGE);
        assert_eq!(outcome.usuarios[0].rol, "USER");
    }

    #[actix_web::test]
    async fn activation_message_follows_flag() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Put
                    && req.endpoint == "/usuarios/7/activar"
                    && req.body == Some(json!({}))
            })
            .times(1)
            .returning(|_| Ok(json!({"message": "Usuario desactivado", "activo": false})));
        expect_user_list(&mut api);

        let outcome = toggle_activo(&api, "jwt", 7).await.unwrap();

        assert_eq!(outcome.success, DEACTIVATED_MESSAGE);
    }

    #[actix_web::test]
    async fn failed_role_change_is_an_error() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Put)
            .times(1)
            .returning(|_| Err(backend_failure()));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get)
            .times(0);

        assert!(cambiar_rol(&api, "jwt", 7, Role::Admin).await.is_err());
    }
}
