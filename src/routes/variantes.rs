//! Admin CRUD for add-ons, mirroring the mueble pages.

use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::api::ApiClient;
use crate::domain::auth::SessionUser;
use crate::dto::variantes::VariantesOutcome;
use crate::forms::variantes::VarianteForm;
use crate::routes::{base_context, error_text, render_page_or_partial, render_template};
use crate::services::variantes as variantes_service;

const LIST_PARTIAL: &str = "admin/variantes/_list.html";

fn render_outcome(tera: &Tera, outcome: VariantesOutcome) -> HttpResponse {
    let mut context = Context::new();
    context.insert("variantes", &outcome.variantes);
    context.insert("success", outcome.success);
    render_template(tera, LIST_PARTIAL, &context)
}

#[get("/variantes")]
pub async fn list_variantes(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let variantes = variantes_service::list_variantes(api.get_ref(), Some(&user.token)).await;

    let mut context = base_context(&flash_messages, Some(&user), "variantes");
    context.insert("variantes", &variantes);
    render_template(&tera, "admin/variantes/index.html", &context)
}

#[get("/variantes/new")]
pub async fn new_variante(
    req: HttpRequest,
    user: SessionUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, Some(&user), "variantes");
    context.insert("variante", &None::<()>);
    render_page_or_partial(
        &req,
        &tera,
        "admin/variantes/form.html",
        "admin/variantes/_form.html",
        &context,
    )
}

#[get("/variantes/{id}/edit")]
pub async fn edit_variante(
    req: HttpRequest,
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let variante = variantes_service::get_variante(api.get_ref(), &user.token, id.into_inner()).await;

    let mut context = base_context(&flash_messages, Some(&user), "variantes");
    context.insert("variante", &variante);
    render_page_or_partial(
        &req,
        &tera,
        "admin/variantes/form.html",
        "admin/variantes/_form.html",
        &context,
    )
}

#[post("/variantes/create")]
pub async fn create_variante(
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<VarianteForm>,
) -> impl Responder {
    match variantes_service::create_variante(api.get_ref(), &user.token, form).await {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to create variante: {err}");
            error_text("Error creando variante")
        }
    }
}

#[put("/variantes/{id}/update")]
pub async fn update_variante(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<VarianteForm>,
) -> impl Responder {
    match variantes_service::update_variante(api.get_ref(), &user.token, id.into_inner(), form).await
    {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to update variante: {err}");
            error_text("Error actualizando variante")
        }
    }
}

#[delete("/variantes/{id}/delete")]
pub async fn delete_variante(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match variantes_service::delete_variante(api.get_ref(), &user.token, id.into_inner()).await {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to delete variante: {err}");
            error_text("Error eliminando variante")
        }
    }
}
