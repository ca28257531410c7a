//! Order pages for customers (`/mis-ordenes`) and admins (`/admin/ordenes`).
//!
//! Both families share the same templates and service calls. Customer
//! actions answer with full pages; admin actions answer with the
//! `_detail.html` fragment for an HTMX swap.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::api::ApiClient;
use crate::domain::auth::SessionUser;
use crate::dto::ordenes::{OrdenDetailData, OrdenDetailOutcome};
use crate::forms::ordenes::NuevaOrdenForm;
use crate::routes::{base_context, error_text, render_template, render_with_status};
use crate::services::ordenes::{self as ordenes_service, EMPTY_ORDER_MESSAGE};
use crate::services::{ServiceError, ServiceResult};

/// Where an order page lives and how its actions answer.
#[derive(Clone, Copy)]
struct OrdenesArea {
    base_path: &'static str,
    current_page: &'static str,
    partial: bool,
}

const CLIENTE: OrdenesArea = OrdenesArea {
    base_path: "/mis-ordenes",
    current_page: "mis_ordenes",
    partial: false,
};

const ADMIN: OrdenesArea = OrdenesArea {
    base_path: "/admin/ordenes",
    current_page: "admin_ordenes",
    partial: true,
};

fn area_context(
    area: OrdenesArea,
    flash_messages: &IncomingFlashMessages,
    user: &SessionUser,
) -> Context {
    let mut context = base_context(flash_messages, Some(user), area.current_page);
    context.insert("base_path", area.base_path);
    context
}

fn insert_detail(context: &mut Context, detail: &OrdenDetailData) {
    context.insert("orden", &detail.orden);
    context.insert("muebles", &detail.muebles);
    context.insert("variantes", &detail.variantes);
}

async fn list_page(
    area: OrdenesArea,
    user: &SessionUser,
    api: &ApiClient,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let ordenes = ordenes_service::list_ordenes(api, &user.token).await;

    let mut context = area_context(area, flash_messages, user);
    context.insert("ordenes", &ordenes);
    render_template(tera, "ordenes/index.html", &context)
}

async fn detail_page(
    area: OrdenesArea,
    id: i32,
    user: &SessionUser,
    api: &ApiClient,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let detail = ordenes_service::load_orden(api, &user.token, id).await;

    let mut context = area_context(area, flash_messages, user);
    insert_detail(&mut context, &detail);
    render_template(tera, "ordenes/detail.html", &context)
}

/// Renders the outcome of confirm/cancel/delete-detail, or the fixed error
/// text when the backend refused.
fn lifecycle_response(
    area: OrdenesArea,
    result: ServiceResult<OrdenDetailOutcome>,
    error_message: &str,
    user: &SessionUser,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("{error_message}: {err}");
            return error_text(error_message);
        }
    };

    let mut context = area_context(area, flash_messages, user);
    insert_detail(&mut context, &outcome.detail);
    context.insert("success", outcome.success);

    let template = if area.partial {
        "ordenes/_detail.html"
    } else {
        "ordenes/detail.html"
    };
    render_template(tera, template, &context)
}

#[get("")]
pub async fn mis_ordenes(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    list_page(CLIENTE, &user, api.get_ref(), &flash_messages, &tera).await
}

#[get("/new")]
pub async fn new_orden(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = ordenes_service::load_order_form(api.get_ref(), &user.token).await;

    let mut context = area_context(CLIENTE, &flash_messages, &user);
    context.insert("muebles", &data.muebles);
    context.insert("variantes", &data.variantes);
    render_template(&tera, "ordenes/form.html", &context)
}

#[post("/create")]
pub async fn create_orden(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    body: web::Bytes,
) -> impl Responder {
    let form = match NuevaOrdenForm::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse order form: {err}");
            return error_text("Error creando orden");
        }
    };

    match ordenes_service::create_orden(api.get_ref(), &user.token, form).await {
        Ok(outcome) => {
            let mut context = area_context(CLIENTE, &flash_messages, &user);
            context.insert("ordenes", &outcome.ordenes);
            context.insert("success", outcome.success);
            render_template(&tera, "ordenes/index.html", &context)
        }
        Err(ServiceError::EmptyOrder) => {
            let data = ordenes_service::load_order_form(api.get_ref(), &user.token).await;

            let mut context = area_context(CLIENTE, &flash_messages, &user);
            context.insert("muebles", &data.muebles);
            context.insert("variantes", &data.variantes);
            context.insert("error", EMPTY_ORDER_MESSAGE);
            render_with_status(&tera, "ordenes/form.html", &context, StatusCode::BAD_REQUEST)
        }
        Err(err) => {
            log::error!("Failed to create orden: {err}");
            error_text("Error creando orden")
        }
    }
}

#[get("/{id}")]
pub async fn show_mi_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    detail_page(CLIENTE, id.into_inner(), &user, api.get_ref(), &flash_messages, &tera).await
}

#[post("/{id}/confirmar")]
pub async fn confirmar_mi_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = ordenes_service::confirmar_orden(api.get_ref(), &user.token, id.into_inner()).await;
    lifecycle_response(CLIENTE, result, "Error confirmando orden", &user, &flash_messages, &tera)
}

#[post("/{id}/cancelar")]
pub async fn cancelar_mi_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = ordenes_service::cancelar_orden(api.get_ref(), &user.token, id.into_inner()).await;
    lifecycle_response(CLIENTE, result, "Error cancelando orden", &user, &flash_messages, &tera)
}

#[delete("/{id}/detalles/{detalle_id}")]
pub async fn eliminar_mi_detalle(
    path: web::Path<(i32, i32)>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (id, detalle_id) = path.into_inner();
    let result = ordenes_service::eliminar_detalle(api.get_ref(), &user.token, id, detalle_id).await;
    lifecycle_response(
        CLIENTE,
        result,
        "Error eliminando detalle (solo permitido en COTIZACION)",
        &user,
        &flash_messages,
        &tera,
    )
}

#[get("/ordenes")]
pub async fn admin_ordenes(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    list_page(ADMIN, &user, api.get_ref(), &flash_messages, &tera).await
}

#[get("/ordenes/{id}")]
pub async fn admin_show_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    detail_page(ADMIN, id.into_inner(), &user, api.get_ref(), &flash_messages, &tera).await
}

#[post("/ordenes/{id}/confirmar")]
pub async fn admin_confirmar_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = ordenes_service::confirmar_orden(api.get_ref(), &user.token, id.into_inner()).await;
    lifecycle_response(ADMIN, result, "Error confirmando orden", &user, &flash_messages, &tera)
}

#[post("/ordenes/{id}/cancelar")]
pub async fn admin_cancelar_orden(
    id: web::Path<i32>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = ordenes_service::cancelar_orden(api.get_ref(), &user.token, id.into_inner()).await;
    lifecycle_response(ADMIN, result, "Error cancelando orden", &user, &flash_messages, &tera)
}

#[delete("/ordenes/{id}/detalles/{detalle_id}")]
pub async fn admin_eliminar_detalle(
    path: web::Path<(i32, i32)>,
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (id, detalle_id) = path.into_inner();
    let result = ordenes_service::eliminar_detalle(api.get_ref(), &user.token, id, detalle_id).await;
    lifecycle_response(
        ADMIN,
        result,
        "Error eliminando detalle (solo permitido en COTIZACION)",
        &user,
        &flash_messages,
        &tera,
    )
}
