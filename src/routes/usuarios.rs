//! User administration: role changes and activation toggles.

use actix_web::{HttpResponse, Responder, get, put, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::api::ApiClient;
use crate::domain::auth::{Role, SessionUser};
use crate::dto::usuarios::UsuariosOutcome;
use crate::routes::{base_context, error_text, render_template};
use crate::services::ServiceResult;
use crate::services::usuarios as usuarios_service;

const ROLE_ERROR: &str = "Error actualizando rol";
const STATUS_ERROR: &str = "Error actualizando estado del usuario";

fn render_outcome(tera: &Tera, result: ServiceResult<UsuariosOutcome>, error_message: &str) -> HttpResponse {
    match result {
        Ok(outcome) => {
            let mut context = Context::new();
            context.insert("usuarios", &outcome.usuarios);
            context.insert("success", outcome.success);
            render_template(tera, "admin/usuarios/_list.html", &context)
        }
        Err(err) => {
            log::error!("{error_message}: {err}");
            error_text(error_message)
        }
    }
}

#[get("/usuarios")]
pub async fn list_usuarios(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let usuarios = usuarios_service::list_usuarios(api.get_ref(), &user.token).await;

    let mut context = base_context(&flash_messages, Some(&user), "usuarios");
    context.insert("usuarios", &usuarios);
    render_template(&tera, "admin/usuarios/index.html", &context)
}

#[put("/usuarios/{id}/promover")]
pub async fn promover_usuario(
    id: web::Path<i64>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result =
        usuarios_service::cambiar_rol(api.get_ref(), &user.token, id.into_inner(), Role::Admin).await;
    render_outcome(&tera, result, ROLE_ERROR)
}

#[put("/usuarios/{id}/degradar")]
pub async fn degradar_usuario(
    id: web::Path<i64>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result =
        usuarios_service::cambiar_rol(api.get_ref(), &user.token, id.into_inner(), Role::User).await;
    render_outcome(&tera, result, ROLE_ERROR)
}

#[put("/usuarios/{id}/activar")]
pub async fn activar_usuario(
    id: web::Path<i64>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = usuarios_service::toggle_activo(api.get_ref(), &user.token, id.into_inner()).await;
    render_outcome(&tera, result, STATUS_ERROR)
}
