use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::auth::{LoginRequest, RegisterRequest};
use crate::forms::{FormError, validate_form};

#[derive(Deserialize, Validate)]
/// Credentials posted by the login page.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    /// Path to return to after a successful login.
    #[serde(default)]
    pub next: Option<String>,
}

impl From<&LoginForm> for LoginRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
        }
    }
}

#[derive(Deserialize, Validate)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
/// Account registration form.
pub struct RegisterForm {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub confirm_password: String,
}

fn passwords_match(form: &RegisterForm) -> Result<(), ValidationError> {
    if form.password == form.confirm_password {
        Ok(())
    } else {
        Err(ValidationError::new("passwords_mismatch"))
    }
}

impl RegisterForm {
    /// Human-readable description of the first problem found, if any.
    pub fn problem(&self) -> Option<&'static str> {
        let Err(FormError::Validation(errors)) = validate_form(self) else {
            return None;
        };
        let fields = errors.field_errors();
        let message = if fields.contains_key("username") {
            "El nombre de usuario debe tener entre 3 y 50 caracteres"
        } else if fields.contains_key("email") {
            "El email no es válido"
        } else if fields.contains_key("password") {
            "La contraseña debe tener al menos 6 caracteres"
        } else {
            "Las contraseñas no coinciden"
        };
        Some(message)
    }
}

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn valid_registration_has_no_problem() {
        let form = register_form("secreto", "secreto");

        assert!(form.problem().is_none());
        let request = RegisterRequest::from(&form);
        assert_eq!(request.username, "ana");
        assert_eq!(request.email, "ana@example.com");
    }

    #[test]
    fn mismatched_passwords_are_reported() {
        let form = register_form("secreto", "otro123");

        assert_eq!(form.problem(), Some("Las contraseñas no coinciden"));
    }

    #[test]
    fn short_password_is_reported_first() {
        let form = register_form("abc", "abc");

        assert_eq!(
            form.problem(),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }

    #[test]
    fn login_request_trims_username() {
        let form = LoginForm {
            username: "  ana ".to_string(),
            password: "x".to_string(),
            next: None,
        };

        assert_eq!(LoginRequest::from(&form).username, "ana");
    }
}
