//! Login, registration and logout.

use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::api::ApiClient;
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::routes::{
    base_context, home_for, redirect, render_template, render_with_status, safe_next,
};
use crate::services::auth::{self as auth_service, INVALID_CREDENTIALS_MESSAGE};
use crate::services::ServiceError;
use crate::session;

pub const REGISTERED_MESSAGE: &str = "Usuario registrado exitosamente. Ahora puede iniciar sesión.";
pub const LOGGED_OUT_MESSAGE: &str = "Sesión cerrada";

#[derive(Deserialize)]
struct LoginQuery {
    next: Option<String>,
}

fn login_page(
    tera: &Tera,
    mut context: Context,
    next: Option<&str>,
    error: Option<&str>,
) -> HttpResponse {
    context.insert("next", &safe_next(next));
    context.insert("error", &error);
    render_template(tera, "auth/login.html", &context)
}

#[get("/login")]
pub async fn show_login(
    query: web::Query<LoginQuery>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Some(user) = session::current_user(&session) {
        return redirect(home_for(&user));
    }

    let context = base_context(&flash_messages, None, "login");
    login_page(&tera, context, query.next.as_deref(), None)
}

#[post("/login")]
pub async fn login(
    session: Session,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(api.get_ref(), &form).await {
        Ok(user) => {
            if let Err(err) = session::login(&session, &user) {
                log::error!("Failed to store session for {}: {err}", user.username);
                return HttpResponse::InternalServerError().finish();
            }
            log::info!("User {} logged in as {}", user.username, user.role);
            let target = safe_next(form.next.as_deref()).unwrap_or(home_for(&user));
            redirect(target)
        }
        Err(err) => {
            let message = match err {
                ServiceError::Rejected(message) => message,
                _ => INVALID_CREDENTIALS_MESSAGE.to_string(),
            };
            let context = base_context(&flash_messages, None, "login");
            login_page(&tera, context, form.next.as_deref(), Some(&message))
        }
    }
}

#[get("/register")]
pub async fn show_register(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Some(user) = session::current_user(&session) {
        return redirect(home_for(&user));
    }

    let mut context = base_context(&flash_messages, None, "register");
    context.insert("error", &None::<String>);
    render_template(&tera, "auth/register.html", &context)
}

#[post("/register")]
pub async fn register(
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    match auth_service::register(api.get_ref(), &form).await {
        Ok(()) => {
            FlashMessage::success(REGISTERED_MESSAGE).send();
            redirect("/login")
        }
        Err(err) => {
            let message = match err {
                ServiceError::Rejected(message) => message,
                other => {
                    log::error!("Registration failed: {other}");
                    auth_service::REGISTER_FAILED_MESSAGE.to_string()
                }
            };
            let mut context = base_context(&flash_messages, None, "register");
            context.insert("error", &message);
            context.insert("username", &form.username);
            context.insert("email", &form.email);
            render_with_status(&tera, "auth/register.html", &context, StatusCode::BAD_REQUEST)
        }
    }
}

#[get("/logout")]
pub async fn logout_get(session: Session) -> impl Responder {
    logout_session(&session)
}

#[post("/logout")]
pub async fn logout(session: Session) -> impl Responder {
    logout_session(&session)
}

fn logout_session(session: &Session) -> HttpResponse {
    if let Some(user) = session::current_user(session) {
        log::info!("User {} logged out", user.username);
    }
    session::logout(session);
    FlashMessage::info(LOGGED_OUT_MESSAGE).send();
    redirect("/login")
}
