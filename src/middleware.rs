//! Route guards composed in front of the protected scopes.
//!
//! Both guards are plain async functions meant for
//! [`actix_web::middleware::from_fn`]. Anonymous visitors are sent to the
//! login page with the requested path preserved in `next`; an authenticated
//! user without the admin role gets a fixed 403 from [`require_admin`].

use actix_session::SessionExt;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::routes::is_htmx;
use crate::session::current_user;

pub const ACCESS_DENIED_MESSAGE: &str =
    "Acceso denegado: se requieren permisos de administrador";

/// Builds `/login?next=<path>` for the current request.
pub fn login_redirect_target(req: &HttpRequest) -> String {
    let path = match req.uri().path_and_query() {
        Some(pq) => pq.as_str(),
        None => req.path(),
    };
    let next: String = serde_html_form::to_string(&[("next", path)]).unwrap_or_default();
    if next.is_empty() {
        "/login".to_string()
    } else {
        format!("/login?{next}")
    }
}

fn login_redirect(req: &HttpRequest) -> HttpResponse {
    let target = login_redirect_target(req);
    if is_htmx(req) {
        HttpResponse::Unauthorized()
            .insert_header(("HX-Redirect", target))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, target))
            .finish()
    }
}

/// Lets authenticated users through; redirects everyone else to the login page.
pub async fn require_login(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    if current_user(&req.get_session()).is_none() {
        let response = login_redirect(req.request());
        return Ok(req.into_response(response));
    }

    next.call(req).await.map(ServiceResponse::map_into_boxed_body)
}

/// Lets admins through, redirects anonymous visitors and rejects other users
/// with 403.
pub async fn require_admin(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    match current_user(&req.get_session()) {
        None => {
            let response = login_redirect(req.request());
            Ok(req.into_response(response))
        }
        Some(user) if !user.is_admin() => {
            log::warn!("User {} denied access to {}", user.username, req.path());
            let response = HttpResponse::Forbidden()
                .content_type("text/plain; charset=utf-8")
                .body(ACCESS_DENIED_MESSAGE);
            Ok(req.into_response(response))
        }
        Some(_) => next.call(req).await.map(ServiceResponse::map_into_boxed_body),
    }
}
