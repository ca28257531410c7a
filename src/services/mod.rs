//! Service layer: one function per user action.
//!
//! Services are generic over [`Backend`](crate::api::Backend) so they can be
//! exercised against an in-memory backend. Read paths degrade to empty data
//! when the backend fails; write paths report a [`ServiceError`].

use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;

pub mod admin;
pub mod auth;
pub mod catalogo;
pub mod muebles;
pub mod ordenes;
pub mod usuarios;
pub mod variantes;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend call failed: {0}")]
    Api(#[from] ApiError),

    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    #[error("order must contain at least one line")]
    EmptyOrder,

    #[error("invalid credentials")]
    InvalidCredentials,

    /// Input rejected with a message that can be shown to the user.
    #[error("{0}")]
    Rejected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
