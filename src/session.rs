//! Authentication state stored in the cookie-backed session.
//!
//! The whole [`SessionUser`] lives under a single key so the token, username
//! and role are always written and cleared together.

use std::future::{Ready, ready};

use actix_session::{Session, SessionExt, SessionInsertError};
use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized};

use crate::domain::auth::SessionUser;

const SESSION_USER_KEY: &str = "user";

/// Returns the logged-in user, if any. A corrupt entry reads as anonymous.
pub fn current_user(session: &Session) -> Option<SessionUser> {
    match session.get::<SessionUser>(SESSION_USER_KEY) {
        Ok(user) => user,
        Err(err) => {
            log::error!("Failed to read session user: {err}");
            None
        }
    }
}

pub fn is_authenticated(session: &Session) -> bool {
    current_user(session).is_some()
}

pub fn is_admin(session: &Session) -> bool {
    current_user(session).is_some_and(|user| user.is_admin())
}

/// Stores the user and rotates the session key.
pub fn login(session: &Session, user: &SessionUser) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(SESSION_USER_KEY, user)
}

pub fn logout(session: &Session) {
    session.purge();
}

impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        ready(current_user(&session).ok_or_else(|| ErrorUnauthorized("Sesión no iniciada")))
    }
}

#[cfg(test)]
mod tests {
    use actix_session::SessionExt;
    use actix_web::test::TestRequest;

    use super::*;
    use crate::domain::auth::Role;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            token: "token".to_string(),
            username: "ana".to_string(),
            role,
        }
    }

    #[test]
    fn login_and_logout_round_trip() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();

        assert!(!is_authenticated(&session));

        login(&session, &user(Role::Admin)).unwrap();
        assert!(is_authenticated(&session));
        assert!(is_admin(&session));
        assert_eq!(current_user(&session).unwrap().username, "ana");

        logout(&session);
        assert!(!is_authenticated(&session));
    }

    #[test]
    fn regular_user_is_not_admin() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();

        login(&session, &user(Role::User)).unwrap();

        assert!(is_authenticated(&session));
        assert!(!is_admin(&session));
    }
}
