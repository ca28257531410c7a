use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::ApiClient;
use crate::domain::auth::SessionUser;
use crate::routes::{base_context, render_template};
use crate::services::catalogo as catalogo_service;

#[get("")]
/// Public furniture catalog with the available add-ons.
pub async fn show_catalogo(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = catalogo_service::load_catalogo(api.get_ref()).await;

    let mut context = base_context(&flash_messages, Some(&user), "catalogo");
    context.insert("muebles", &data.muebles);
    context.insert("variantes", &data.variantes);

    render_template(&tera, "catalogo/index.html", &context)
}
