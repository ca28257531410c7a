use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::ApiClient;
use crate::domain::auth::SessionUser;
use crate::routes::{base_context, render_template};
use crate::services::admin::load_dashboard;

/// Admin landing page with entity counts.
#[get("")]
pub async fn show_dashboard(
    user: SessionUser,
    api: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dashboard = load_dashboard(api.get_ref(), &user.token).await;

    let mut context = base_context(&flash_messages, Some(&user), "admin");
    context.insert("dashboard", &dashboard);
    render_template(&tera, "admin/index.html", &context)
}
