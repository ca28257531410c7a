#![allow(dead_code)]

use actix_session::Session;
use actix_web::cookie::Cookie;
use actix_web::cookie::time::Duration;
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, web};
use muebleria_web::domain::auth::{Role, SessionUser};
use muebleria_web::session;

/// Port 9 (discard) refuses connections on the test hosts.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9/api";

/// Test-only route storing a session for the role given in the path.
pub async fn test_login(role: web::Path<String>, session: Session) -> HttpResponse {
    let user = SessionUser {
        token: format!("token-{role}"),
        username: format!("tester-{role}"),
        role: Role::from_backend(&role),
    };
    session::login(&session, &user).unwrap();
    HttpResponse::Ok().finish()
}

/// Owned copies of the cookies `resp` asks the browser to keep. Removal
/// cookies (empty value, zero max-age) are dropped as a browser would.
pub fn cookies_from<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .filter(|cookie| !cookie.value().is_empty() && cookie.max_age() != Some(Duration::ZERO))
        .map(|cookie| cookie.into_owned())
        .collect()
}

/// Builds the full application (sessions, flash messages, templates and the
/// real route table) pointed at `$backend`, plus `/test/login/{role}`.
macro_rules! test_app {
    ($backend:expr) => {{
        use actix_session::{SessionMiddleware, storage::CookieSessionStore};
        use actix_web::cookie::Key;
        use actix_web::{App, test, web};
        use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

        let key = Key::generate();
        let api = muebleria_web::api::ApiClient::new($backend, std::time::Duration::from_secs(5))
            .unwrap();
        let tera = tera::Tera::new("templates/**/*").unwrap();
        let flash = FlashMessagesFramework::builder(CookieMessageStore::builder(key.clone()).build())
            .build();

        test::init_service(
            App::new()
                .wrap(flash)
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(api))
                .route("/test/login/{role}", web::get().to(common::test_login))
                .configure(muebleria_web::configure),
        )
        .await
    }};
}

/// Logs in through `/test/login/{role}` and returns the session cookies.
macro_rules! login_as {
    ($app:expr, $role:expr) => {{
        let req = actix_web::test::TestRequest::get()
            .uri(&format!("/test/login/{}", $role))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert!(resp.status().is_success());
        common::cookies_from(&resp)
    }};
}
