//! HTTP handlers and the helpers they share for rendering and redirects.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::auth::SessionUser;

pub mod admin;
pub mod auth;
pub mod catalogo;
pub mod main;
pub mod muebles;
pub mod ordenes;
pub mod usuarios;
pub mod variantes;

/// Maps a flash level to the Bootstrap alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every full page: pending alerts, the logged-in user and
/// the active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&SessionUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context
}

pub fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `partial` alone for HTMX requests and `page` otherwise.
pub fn render_page_or_partial(
    req: &HttpRequest,
    tera: &Tera,
    page: &str,
    partial: &str,
    context: &Context,
) -> HttpResponse {
    if is_htmx(req) {
        render_template(tera, partial, context)
    } else {
        render_template(tera, page, context)
    }
}

/// Plain-text 400 used when a write fails and there is no richer view to show.
pub fn error_text(message: &str) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message.to_string())
}

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Accepts only same-site absolute paths as post-login targets.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}

/// Landing page for a user right after login.
pub fn home_for(user: &SessionUser) -> &'static str {
    if user.is_admin() { "/admin" } else { "/catalogo" }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn safe_next_rejects_external_targets() {
        assert_eq!(safe_next(Some("/mis-ordenes/3")), Some("/mis-ordenes/3"));
        assert_eq!(safe_next(Some("//evil.example")), None);
        assert_eq!(safe_next(Some("https://evil.example")), None);
        assert_eq!(safe_next(Some("/\\evil.example")), None);
        assert_eq!(safe_next(None), None);
    }

    #[test]
    fn detects_htmx_requests() {
        let htmx = TestRequest::default()
            .insert_header(("HX-Request", "true"))
            .to_http_request();
        let plain = TestRequest::default().to_http_request();

        assert!(is_htmx(&htmx));
        assert!(!is_htmx(&plain));
    }
}
