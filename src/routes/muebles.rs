//! Admin CRUD for furniture items. Mutations answer with the `_list.html`
//! fragment so HTMX can swap it into the page.

use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::api::ApiClient;
use crate::domain::auth::SessionUser;
use crate::dto::muebles::MueblesOutcome;
use crate::forms::muebles::MuebleForm;
use crate::routes::{base_context, error_text, render_page_or_partial, render_template};
use crate::services::muebles as muebles_service;

const LIST_PARTIAL: &str = "admin/muebles/_list.html";

fn render_outcome(tera: &Tera, outcome: MueblesOutcome) -> HttpResponse {
    let mut context = Context::new();
    context.insert("muebles", &outcome.muebles);
    context.insert("success", outcome.success);
    render_template(tera, LIST_PARTIAL, &context)
}

#[get("/muebles")]
pub async fn list_muebles(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let muebles = muebles_service::list_muebles(api.get_ref(), Some(&user.token)).await;

    let mut context = base_context(&flash_messages, Some(&user), "muebles");
    context.insert("muebles", &muebles);
    render_template(&tera, "admin/muebles/index.html", &context)
}

#[get("/muebles/new")]
pub async fn new_mueble(
    req: HttpRequest,
    user: SessionUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, Some(&user), "muebles");
    context.insert("mueble", &None::<()>);
    render_page_or_partial(
        &req,
        &tera,
        "admin/muebles/form.html",
        "admin/muebles/_form.html",
        &context,
    )
}

#[get("/muebles/{id}/edit")]
pub async fn edit_mueble(
    req: HttpRequest,
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mueble = muebles_service::get_mueble(api.get_ref(), &user.token, id.into_inner()).await;

    let mut context = base_context(&flash_messages, Some(&user), "muebles");
    context.insert("mueble", &mueble);
    render_page_or_partial(
        &req,
        &tera,
        "admin/muebles/form.html",
        "admin/muebles/_form.html",
        &context,
    )
}

#[post("/muebles/create")]
pub async fn create_mueble(
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<MuebleForm>,
) -> impl Responder {
    match muebles_service::create_mueble(api.get_ref(), &user.token, form).await {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to create mueble: {err}");
            error_text("Error creando mueble")
        }
    }
}

#[put("/muebles/{id}/update")]
pub async fn update_mueble(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<MuebleForm>,
) -> impl Responder {
    match muebles_service::update_mueble(api.get_ref(), &user.token, id.into_inner(), form).await
    {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to update mueble: {err}");
            error_text("Error actualizando mueble")
        }
    }
}

#[delete("/muebles/{id}/delete")]
pub async fn delete_mueble(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match muebles_service::delete_mueble(api.get_ref(), &user.token, id.into_inner()).await {
        Ok(outcome) => render_outcome(&tera, outcome),
        Err(err) => {
            log::error!("Failed to delete mueble: {err}");
            error_text("Error eliminando mueble")
        }
    }
}
