use actix_session::Session;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::routes::{base_context, home_for, redirect, render_template};
use crate::session;

#[get("/")]
pub async fn show_index(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Some(user) = session::current_user(&session) {
        return redirect(home_for(&user));
    }

    let context = base_context(&flash_messages, None, "index");
    render_template(&tera, "main/index.html", &context)
}
