//! Login and registration against `/auth`.

use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiError, Backend, BackendExt, endpoints};
use crate::domain::auth::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::forms::validate_form;
use crate::services::{ServiceError, ServiceResult};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Debe ingresar usuario y contraseña";
pub const REGISTER_FAILED_MESSAGE: &str = "Error registrando usuario";

/// Exchanges the posted credentials for a token.
pub async fn login<B>(api: &B, form: &LoginForm) -> ServiceResult<SessionUser>
where
    B: Backend + ?Sized,
{
    if let Err(err) = validate_form(form) {
        log::warn!("Rejected login form: {err}");
        return Err(ServiceError::Rejected(MISSING_CREDENTIALS_MESSAGE.to_string()));
    }

    let request = LoginRequest::from(form);
    match api.post::<_, AuthResponse>(endpoints::LOGIN, &request, None).await {
        Ok(response) => Ok(SessionUser::from(response)),
        Err(err) => {
            log::warn!("Login failed for {}: {err}", request.username);
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[derive(Deserialize)]
struct BackendError {
    error: String,
}

/// Pulls the human-readable `error` field out of a rejected response body.
fn backend_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Status { body, .. } => serde_json::from_str::<BackendError>(body)
            .ok()
            .map(|e| e.error),
        _ => None,
    }
}

/// Validates the registration form and creates the account.
pub async fn register<B>(api: &B, form: &RegisterForm) -> ServiceResult<()>
where
    B: Backend + ?Sized,
{
    if let Some(problem) = form.problem() {
        return Err(ServiceError::Rejected(problem.to_string()));
    }

    let request = RegisterRequest::from(form);
    api.post::<_, Value>(endpoints::REGISTER, &request, None)
        .await
        .map_err(|err| {
            log::error!("Failed to register {}: {err}", request.username);
            ServiceError::Rejected(
                backend_message(&err).unwrap_or_else(|| REGISTER_FAILED_MESSAGE.to_string()),
            )
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiMethod;
    use crate::api::mock::{MockBackend, backend_failure};
    use crate::domain::auth::Role;

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            next: None,
        }
    }

    #[actix_web::test]
    async fn successful_login_returns_session_user() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| {
                req.method == ApiMethod::Post
                    && req.endpoint == "/auth/login"
                    && req.body == Some(json!({"username": "ana", "password": "secreto"}))
                    && req.token.is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(json!({"token": "jwt", "type": "Bearer", "username": "ana", "rol": "ADMIN"}))
            });

        let user = login(&api, &login_form("ana", "secreto")).await.unwrap();

        assert_eq!(user.token, "jwt");
        assert_eq!(user.role, Role::Admin);
    }

    #[actix_web::test]
    async fn rejected_login_is_invalid_credentials() {
        let mut api = MockBackend::new();
        api.expect_send()
            .times(1)
            .returning(|_| Err(ApiError::Status { status: 401, body: String::new() }));

        let result = login(&api, &login_form("ana", "mala")).await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn empty_login_does_not_call_backend() {
        let mut api = MockBackend::new();
        api.expect_send().times(0);

        let result = login(&api, &login_form("", "")).await;

        assert!(
            matches!(result, Err(ServiceError::Rejected(msg)) if msg == MISSING_CREDENTIALS_MESSAGE)
        );
    }

    #[actix_web::test]
    async fn invalid_registration_does_not_call_backend() {
        let mut api = MockBackend::new();
        api.expect_send().times(0);
        let form = RegisterForm {
            username: "ana".to_string(),
            email: "no-es-email".to_string(),
            password: "secreto".to_string(),
            confirm_password: "secreto".to_string(),
        };

        let result = register(&api, &form).await;

        assert!(matches!(result, Err(ServiceError::Rejected(msg)) if msg == "El email no es válido"));
    }

    #[actix_web::test]
    async fn registration_surfaces_backend_message() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Post && req.endpoint == "/auth/register")
            .times(1)
            .returning(|_| {
                Err(ApiError::Status {
                    status: 400,
                    body: r#"{"error":"El email ya está registrado"}"#.to_string(),
                })
            });
        let form = RegisterForm {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
            confirm_password: "secreto".to_string(),
        };

        let result = register(&api, &form).await;

        assert!(
            matches!(result, Err(ServiceError::Rejected(msg)) if msg == "El email ya está registrado")
        );
    }

    #[actix_web::test]
    async fn unreadable_registration_failure_uses_fixed_message() {
        let mut api = MockBackend::new();
        api.expect_send().times(1).returning(|_| Err(backend_failure()));
        let form = RegisterForm {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
            confirm_password: "secreto".to_string(),
        };

        let result = register(&api, &form).await;

        assert!(
            matches!(result, Err(ServiceError::Rejected(msg)) if msg == REGISTER_FAILED_MESSAGE)
        );
    }

    #[test]
    fn backend_message_reads_error_field() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"error":"El nombre de usuario ya existe"}"#.to_string(),
        };

        assert_eq!(
            backend_message(&err).as_deref(),
            Some("El nombre de usuario ya existe")
        );
        assert_eq!(backend_message(&ApiError::Transport("x".into())), None);
    }
}
